// ABOUTME: Configuration management for gh-pair
// Handles the policy constants of the interactive session and the identity provider settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::MAX_RECENT_PAIRS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Incremental search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Repository collaborator suggestions
    #[serde(default)]
    pub collaborators: CollaboratorsConfig,

    /// Most-recently-used pair history
    #[serde(default)]
    pub history: HistoryConfig,

    /// Identity provider (gh CLI) settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Text input settings
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Delay between the last keystroke and the search it triggers
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Shortest trimmed query that is sent to the provider
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Number of users requested per search
    #[serde(default = "default_search_per_page")]
    pub per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            per_page: default_search_per_page(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorsConfig {
    /// Number of collaborators requested for suggestions
    #[serde(default = "default_collaborators_per_page")]
    pub per_page: u32,
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        Self {
            per_page: default_collaborators_per_page(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum length of the recent pairs list; values above 10 are capped
    #[serde(default = "default_max_recent")]
    pub max_recent: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_recent: default_max_recent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Executable used to reach GitHub
    #[serde(default = "default_program")]
    pub program: String,

    /// Optional upper bound for any single background command, in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum number of characters accepted by the text input
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
        }
    }
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_min_query_len() -> usize {
    2
}

const fn default_search_per_page() -> u32 {
    10
}

const fn default_collaborators_per_page() -> u32 {
    20
}

const fn default_max_recent() -> usize {
    MAX_RECENT_PAIRS
}

fn default_program() -> String {
    "gh".to_string()
}

const fn default_char_limit() -> usize {
    50
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if let Some(file_config) = Self::load_file(&path)? {
                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Parse one config file; a missing file is not an error
    pub fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let file_config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(Some(file_config))
    }

    /// Get configuration file paths in order of precedence (later wins)
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. User config (~/.gh-pair/config.toml)
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".gh-pair").join("config.toml"));
        }

        // 2. Repository config (<git-dir>/gh-pair/config.toml)
        if let Ok(data_dir) = crate::git::data_dir() {
            paths.push(data_dir.join("config.toml"));
        }

        paths
    }

    /// Merge another config into this one; values left at their defaults do not override
    pub fn merge(&mut self, other: Self) {
        if other.search.debounce_ms != default_debounce_ms() {
            self.search.debounce_ms = other.search.debounce_ms;
        }
        if other.search.min_query_len != default_min_query_len() {
            self.search.min_query_len = other.search.min_query_len;
        }
        if other.search.per_page != default_search_per_page() {
            self.search.per_page = other.search.per_page;
        }
        if other.collaborators.per_page != default_collaborators_per_page() {
            self.collaborators.per_page = other.collaborators.per_page;
        }
        if other.history.max_recent != default_max_recent() {
            self.history.max_recent = other.history.max_recent;
        }
        if other.provider.program != default_program() {
            self.provider.program = other.provider.program;
        }
        if other.provider.timeout_secs.is_some() {
            self.provider.timeout_secs = other.provider.timeout_secs;
        }
        if other.input.char_limit != default_char_limit() {
            self.input.char_limit = other.input.char_limit;
        }
    }

    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.provider.timeout_secs.map(Duration::from_secs)
    }
}
