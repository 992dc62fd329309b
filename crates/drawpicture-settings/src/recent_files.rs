//! Most-recently-used document list.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of entries kept.
pub const DEFAULT_RECENT_FILES: usize = 5;

/// Recently opened or saved documents, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    capacity: usize,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_FILES)
    }
}

impl RecentFiles {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Move `path` to the front, dropping duplicates and the overflow.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.entries.retain(|p| p != &path);
        self.entries.insert(0, path);
        self.entries.truncate(self.capacity);
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p != path);
        before != self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn most_recent(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
