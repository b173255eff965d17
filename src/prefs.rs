//! Saved search, category and sort between sessions.
//!
//! Stored as JSON next to the config file. Anything unreadable is treated
//! as "no preferences" without surfacing an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::SortKey;

const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(alias = "q")]
    pub query: String,
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub sort: SortKey,
}

/// Where preferences are kept
pub trait PrefsStore {
    /// Load saved preferences, falling back to defaults on any problem
    fn load(&self) -> Preferences;

    fn save(&self, prefs: &Preferences) -> Result<()>;
}

/// Preferences persisted to `prefs.json` in the data directory
#[derive(Debug, Clone)]
pub struct FilePrefsStore {
    path: PathBuf,
}

impl FilePrefsStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PREFS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove saved preferences, if any
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl PrefsStore for FilePrefsStore {
    fn load(&self) -> Preferences {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Preferences::default();
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::debug!("ignoring unreadable preferences {}: {}", self.path.display(), e);
                Preferences::default()
            }
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(prefs)?)?;
        Ok(())
    }
}
