// ABOUTME: Behavioral tests for pair persistence in a real repository's data directory

use gh_pair::cli::remove::remove_handles;
use gh_pair::git::RepoPaths;
use gh_pair::models::Pair;
use gh_pair::store::{add_pair, IdentityStore, JsonFileStore, PAIRS_FILE_NAME};
use pretty_assertions::assert_eq;

use super::fixtures::TestRepo;

fn octocat() -> Pair {
    Pair::new("octocat", "The Octocat", "583231+octocat@users.noreply.github.com")
}

#[test]
fn test_pairs_live_inside_git_dir() {
    crate::require_git!();
    let repo = TestRepo::new().unwrap();
    let paths = RepoPaths::discover(&repo.path).unwrap();
    let store = JsonFileStore::new(paths.data_dir.clone());

    add_pair(&store, &octocat()).unwrap();

    let file = repo.git_dir().join("gh-pair").join(PAIRS_FILE_NAME);
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(file).unwrap()).unwrap();
    assert_eq!(json["pairs"][0]["username"], "octocat");
    assert_eq!(json["pairs"][0]["name"], "The Octocat");
}

#[test]
fn test_add_remove_round_trip_keeps_history() {
    crate::require_git!();
    let repo = TestRepo::new().unwrap();
    let paths = RepoPaths::discover(&repo.path).unwrap();
    let store = JsonFileStore::new(paths.data_dir);

    add_pair(&store, &octocat()).unwrap();
    let (removed, missing) = remove_handles(&store, &["@octocat".to_string()]).unwrap();

    assert_eq!(removed, vec![octocat()]);
    assert!(missing.is_empty());
    assert!(store.load_active().unwrap().is_empty());
    assert_eq!(store.load_recent().unwrap(), vec![octocat()]);
}

#[test]
fn test_store_survives_reopen() {
    crate::require_git!();
    let repo = TestRepo::new().unwrap();
    let paths = RepoPaths::discover(&repo.path).unwrap();

    add_pair(&JsonFileStore::new(paths.data_dir.clone()), &octocat()).unwrap();
    let reopened = JsonFileStore::new(paths.data_dir);

    let active = reopened.load_active().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email_address, octocat().email_address);
}
