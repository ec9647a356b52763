// ABOUTME: Behavioral tests for the commit-msg hook against real git commits

use gh_pair::git::RepoPaths;
use gh_pair::hook::{CommitMsgHook, HookManager};
use gh_pair::models::Pair;
use gh_pair::store::{add_pair, JsonFileStore};

use super::fixtures::TestRepo;

fn setup() -> (TestRepo, CommitMsgHook, JsonFileStore) {
    let repo = TestRepo::new().unwrap();
    let paths = RepoPaths::discover(&repo.path).unwrap();
    let hook = CommitMsgHook::new(paths.hooks_dir.clone());
    let store = JsonFileStore::new(paths.data_dir);
    (repo, hook, store)
}

#[test]
fn test_install_is_idempotent() {
    crate::require_git!();
    let (_repo, hook, _store) = setup();

    assert!(!hook.is_installed());
    hook.install().unwrap();
    let first = std::fs::read_to_string(hook.hook_path()).unwrap();
    hook.install().unwrap();
    let second = std::fs::read_to_string(hook.hook_path()).unwrap();

    assert!(hook.is_installed());
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_commit_gets_co_author_trailers() {
    crate::require_git!();
    let (repo, hook, store) = setup();
    hook.install().unwrap();
    add_pair(&store, &Pair::new("octocat", "The Octocat", "1+octocat@users.noreply.github.com"))
        .unwrap();
    add_pair(&store, &Pair::new("hubot", "Hubot", "2+hubot@users.noreply.github.com")).unwrap();

    let message = repo.commit("feature.txt", "Add feature").unwrap();

    assert!(message.starts_with("Add feature"));
    assert!(message.contains("Co-Authored-By: The Octocat <1+octocat@users.noreply.github.com>"));
    assert!(message.contains("Co-Authored-By: Hubot <2+hubot@users.noreply.github.com>"));
}

#[cfg(unix)]
#[test]
fn test_commit_without_pairs_is_untouched() {
    crate::require_git!();
    let (repo, hook, _store) = setup();
    hook.install().unwrap();

    let message = repo.commit("solo.txt", "Solo work").unwrap();
    assert!(!message.contains("Co-Authored-By"));
}

#[cfg(unix)]
#[test]
fn test_uninstall_stops_trailers() {
    crate::require_git!();
    let (repo, hook, store) = setup();
    hook.install().unwrap();
    add_pair(&store, &Pair::new("octocat", "The Octocat", "o@example.com")).unwrap();
    hook.uninstall().unwrap();

    let message = repo.commit("after.txt", "After uninstall").unwrap();
    assert!(!hook.is_installed());
    assert!(!message.contains("Co-Authored-By"));
}
