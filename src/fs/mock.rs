//! In-memory file system for tests

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory `FileSystem` built from explicit files and directories.
///
/// Parent directories of registered files are implied. Files registered via
/// [`MockFileSystem::with_unreadable`] exist but fail on read, which is how
/// permission errors surface to the detector.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        if self.dirs.contains(path) {
            return true;
        }
        // A directory also exists if any registered entry lives under it.
        self.files
            .keys()
            .chain(self.dirs.iter())
            .any(|p| p.ancestors().skip(1).any(|a| a == path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        if self.unreadable.contains(path) {
            return Err(anyhow!("permission denied: {}", path.display()));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))
    }
}
