//! Local Key-Value Storage
//!
//! JSON snapshot persistence: one pretty-printed file per key under the
//! application directory. The directory is injectable so tests can run
//! against a tempdir.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_dir, ensure_lifetrack_dir};

/// Persisted storage keys
pub mod keys {
    pub const CATEGORY_SCORES: &str = "categoryScores";
    pub const CATEGORY_ACTIVITIES: &str = "categoryActivities";
    pub const USER_PROFILE: &str = "userProfile";
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
}

/// File-backed key-value store for JSON snapshots
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Create a store rooted at the default application directory
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            dir: ensure_lifetrack_dir()?,
        })
    }

    /// Create a store rooted at an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and parse a value; Ok(None) when the key has never been written
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Serialize and write a value. The write goes through a temp file and
    /// a rename, so readers never observe a truncated blob.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let content = serde_json::to_string_pretty(value)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    /// Delete a key; deleting an absent key is a no-op
    pub fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Check the backing directory is usable
    pub fn is_healthy(&self) -> bool {
        self.dir.exists()
    }
}
