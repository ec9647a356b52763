// ABOUTME: Shared CLI utilities - opens the current repository and builds its store, provider and hook
//
// Every command except `tui` works on the repository containing the current directory.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::app::Services;
use crate::config::AppConfig;
use crate::git::RepoPaths;
use crate::github::GhCliProvider;
use crate::hook::CommitMsgHook;
use crate::store::JsonFileStore;

/// Everything a command needs to act on one repository
pub struct RepoContext {
    pub paths: RepoPaths,
    pub config: AppConfig,
    pub store: JsonFileStore,
    pub hook: CommitMsgHook,
}

impl RepoContext {
    /// Open the repository containing the current directory
    pub fn open() -> Result<Self> {
        let paths = RepoPaths::current()
            .context("gh-pair must be run inside a git repository")?;
        let config = AppConfig::load()?;
        Ok(Self::from_parts(paths, config))
    }

    pub fn from_parts(paths: RepoPaths, config: AppConfig) -> Self {
        debug!("Using pair data in {}", paths.data_dir.display());
        let store =
            JsonFileStore::new(paths.data_dir.clone()).with_max_recent(config.history.max_recent);
        let hook = CommitMsgHook::new(paths.hooks_dir.clone());
        Self {
            paths,
            config,
            store,
            hook,
        }
    }

    pub fn provider(&self) -> GhCliProvider {
        GhCliProvider::from_config(&self.config)
    }

    /// Hand the collaborators over to an interactive session
    pub fn into_services(self) -> Services {
        let provider = self.provider();
        Services::new(Arc::new(self.store), Arc::new(provider), Arc::new(self.hook))
    }
}
