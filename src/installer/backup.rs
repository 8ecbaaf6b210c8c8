//! Backup of an existing install directory before overwrite

use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};

/// Move an existing install directory aside as
/// `<name>.backup.<timestamp>[-<n>]`, returning the backup path.
///
/// The backup is never cleaned up automatically; after a failed install it
/// is the manual restore point.
pub fn backup_existing(install_dir: &Path) -> io::Result<Option<PathBuf>> {
    if !install_dir.exists() {
        return Ok(None);
    }

    let name = install_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(".claude-agents");
    let parent = install_dir.parent().unwrap_or_else(|| Path::new("."));
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");

    let mut candidate = parent.join(format!("{name}.backup.{stamp}"));
    let mut suffix = 1;
    while candidate.exists() {
        candidate = parent.join(format!("{name}.backup.{stamp}-{suffix}"));
        suffix += 1;
    }

    std::fs::rename(install_dir, &candidate)?;
    Ok(Some(candidate))
}
