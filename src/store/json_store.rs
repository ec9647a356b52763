// ABOUTME: JSON file implementation of the identity store under <git-dir>/gh-pair
//
// Layout (read by the commit-msg hook, keep stable):
//   pairs.json  -> {"pairs":  [{"username", "name", "email"}, ...]}
//   recent.json -> {"recent": [{"username", "name", "email"}, ...]}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::IdentityStore;
use crate::error::{PairError, PairResult};
use crate::models::{dedup_by_handle, push_recent, Pair, MAX_RECENT_PAIRS};

pub const PAIRS_FILE_NAME: &str = "pairs.json";
pub const RECENT_FILE_NAME: &str = "recent.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PairsFile {
    #[serde(default)]
    pairs: Vec<Pair>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentFile {
    #[serde(default)]
    recent: Vec<Pair>,
}

/// Stores pairs as pretty-printed JSON files in a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    max_recent: usize,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_recent: MAX_RECENT_PAIRS,
        }
    }

    #[must_use]
    pub fn with_max_recent(mut self, max_recent: usize) -> Self {
        // The history may be shortened but never grows past the default bound
        self.max_recent = max_recent.min(MAX_RECENT_PAIRS);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T>(&self, file_name: &str) -> PairResult<T>
    where
        T: Default + for<'de> Deserialize<'de>,
    {
        let path = self.dir.join(file_name);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, treating as empty", path.display());
                return Ok(T::default());
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Err(PairError::Persistence(format!("{}: {e}", path.display())));
            }
        };

        serde_json::from_str(&data)
            .map_err(|e| PairError::Persistence(format!("{}: {e}", path.display())))
    }

    fn write<T: Serialize>(&self, file_name: &str, value: &T) -> PairResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content)
            .map_err(|e| PairError::Persistence(format!("{}: {e}", path.display())))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

impl IdentityStore for JsonFileStore {
    fn load_active(&self) -> PairResult<Vec<Pair>> {
        let file: PairsFile = self.read(PAIRS_FILE_NAME)?;
        Ok(dedup_by_handle(file.pairs))
    }

    fn save_active(&self, pairs: &[Pair]) -> PairResult<()> {
        let file = PairsFile {
            pairs: dedup_by_handle(pairs.to_vec()),
        };
        self.write(PAIRS_FILE_NAME, &file)
    }

    fn load_recent(&self) -> PairResult<Vec<Pair>> {
        let file: RecentFile = self.read(RECENT_FILE_NAME)?;
        let mut recent = dedup_by_handle(file.recent);
        recent.truncate(self.max_recent);
        Ok(recent)
    }

    fn record_used(&self, pair: &Pair) -> PairResult<()> {
        let recent = self.load_recent()?;
        let file = RecentFile {
            recent: push_recent(recent, pair.clone(), self.max_recent),
        };
        self.write(RECENT_FILE_NAME, &file)
    }
}
