//! Document file format.
//!
//! A saved document is pretty-printed JSON: a version string, some metadata
//! and the logical document data (shapes, layers, current layer). Writes go to
//! a sibling temporary file that is then renamed over the target, so a failed
//! save never truncates an existing drawing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use drawpicture_core::PersistenceError;

use crate::history::HistorySnapshot;

/// Logical content of a saved document.
pub type DocumentData = HistorySnapshot;

/// Format version written by this build.
pub const FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DocumentMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub document: DocumentData,
}

impl DocumentFile {
    pub fn new(metadata: DocumentMetadata, document: DocumentData) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            metadata,
            document,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and checks the major version.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let file: DocumentFile = serde_json::from_str(json)?;
        if major(&file.version) != major(FORMAT_VERSION) {
            return Err(PersistenceError::UnsupportedVersion {
                found: file.version,
                supported: FORMAT_VERSION.to_string(),
            });
        }
        Ok(file)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = self.to_json()?;
        let tmp = temp_path(path);
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
