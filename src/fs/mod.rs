//! File system abstraction used by the detector
//!
//! Detection only ever reads: it checks whether well-known manifest files or
//! directories exist and reads small manifest files as text. Putting that
//! behind a trait keeps the detector testable without touching the real disk.

use anyhow::Result;
use std::path::Path;

mod mock;
mod real;

pub use mock::MockFileSystem;
pub use real::StdFileSystem;

/// Read-only view of a project directory.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
