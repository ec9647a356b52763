// ABOUTME: In-memory identity provider and hook manager for driving sessions in tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use gh_pair::app::Services;
use gh_pair::error::{PairError, PairResult};
use gh_pair::github::IdentityProvider;
use gh_pair::hook::HookManager;
use gh_pair::models::{normalize_handle, Pair, Team};
use gh_pair::store::{IdentityStore, JsonFileStore};
use tempfile::TempDir;

pub fn pair(handle: &str) -> Pair {
    Pair::new(handle, format!("{handle} name"), format!("{handle}@example.com"))
}

pub fn team(org: &str, slug: &str, name: &str) -> Team {
    Team {
        id: 1,
        slug: slug.to_string(),
        org_name: org.to_string(),
        display_name: name.to_string(),
        description: String::new(),
    }
}

/// Provider answering from fixed data and recording every search it receives
#[derive(Default)]
pub struct FakeProvider {
    pub users: Vec<Pair>,
    pub collaborators: Vec<Pair>,
    pub teams: Vec<Team>,
    pub members: HashMap<String, Vec<Pair>>,
    pub searches: Arc<Mutex<Vec<String>>>,
}

impl FakeProvider {
    pub fn search_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.searches)
    }
}

impl IdentityProvider for FakeProvider {
    fn lookup(&self, handle: &str) -> PairResult<Pair> {
        let handle = normalize_handle(handle);
        self.users
            .iter()
            .find(|u| u.handle == handle)
            .cloned()
            .ok_or_else(|| PairError::NotFound(handle.to_string()))
    }

    fn search(&self, text: &str) -> PairResult<Vec<Pair>> {
        self.searches.lock().unwrap().push(text.to_string());
        let needle = text.to_lowercase();
        Ok(self
            .users
            .iter()
            .filter(|u| u.handle.contains(&needle))
            .cloned()
            .collect())
    }

    fn list_collaborators(&self) -> PairResult<Vec<Pair>> {
        Ok(self.collaborators.clone())
    }

    fn list_teams(&self) -> PairResult<Vec<Team>> {
        Ok(self.teams.clone())
    }

    fn list_team_members(&self, org: &str, slug: &str) -> PairResult<Vec<Pair>> {
        self.members
            .get(&format!("{org}/{slug}"))
            .cloned()
            .ok_or_else(|| PairError::NotFound(format!("{org}/{slug}")))
    }
}

#[derive(Default)]
pub struct FakeHook {
    pub installed: AtomicBool,
}

impl HookManager for FakeHook {
    fn is_installed(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }

    fn install(&self) -> PairResult<()> {
        self.installed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn uninstall(&self) -> PairResult<()> {
        self.installed.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Services backed by a JSON store in a temporary directory
pub struct TestServices {
    pub dir: TempDir,
    pub store: Arc<JsonFileStore>,
    pub services: Services,
}

impl TestServices {
    pub fn new(provider: FakeProvider) -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("gh-pair")));
        let services = Services::new(
            store.clone(),
            Arc::new(provider),
            Arc::new(FakeHook::default()),
        );
        Self {
            dir,
            store,
            services,
        }
    }
}

/// Store whose lists can be read but never written, like a read-only checkout
pub struct ReadOnlyStore {
    pub active: Vec<Pair>,
    pub recent: Vec<Pair>,
}

impl IdentityStore for ReadOnlyStore {
    fn load_active(&self) -> PairResult<Vec<Pair>> {
        Ok(self.active.clone())
    }

    fn save_active(&self, _pairs: &[Pair]) -> PairResult<()> {
        Err(PairError::Persistence("pairs.json is read-only".to_string()))
    }

    fn load_recent(&self) -> PairResult<Vec<Pair>> {
        Ok(self.recent.clone())
    }

    fn record_used(&self, _pair: &Pair) -> PairResult<()> {
        Err(PairError::Persistence("recent.json is read-only".to_string()))
    }
}
