//! Idempotent .gitignore marker for the install directory

use std::io;
use std::path::Path;

pub const IGNORE_ENTRY: &str = ".claude-agents/";
const MARKER_COMMENT: &str = "# agentpack managed agents";

/// Make sure `.gitignore` covers the install directory. Returns whether the
/// file was modified; reruns are no-ops.
pub fn ensure_ignored(project_root: &Path) -> io::Result<bool> {
    let path = project_root.join(".gitignore");
    let existing = if path.is_file() {
        std::fs::read_to_string(&path)?
    } else {
        String::new()
    };

    let already_ignored = existing.lines().any(|line| {
        let trimmed = line.trim();
        trimmed == IGNORE_ENTRY || trimmed == IGNORE_ENTRY.trim_end_matches('/')
    });
    if already_ignored {
        return Ok(false);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(MARKER_COMMENT);
    updated.push('\n');
    updated.push_str(IGNORE_ENTRY);
    updated.push('\n');

    std::fs::write(&path, updated)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_gitignore_when_missing() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_ignored(dir.path()).unwrap());

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(content.contains(".claude-agents/"));
        assert!(content.contains(MARKER_COMMENT));
    }

    #[test]
    fn test_appends_without_clobbering_existing_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "target/\nnode_modules/").unwrap();

        assert!(ensure_ignored(dir.path()).unwrap());

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(content.starts_with("target/\nnode_modules/\n"));
        assert!(content.ends_with(".claude-agents/\n"));
    }

    #[test]
    fn test_rerun_is_a_noop() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_ignored(dir.path()).unwrap());
        let after_first = fs::read_to_string(dir.path().join(".gitignore")).unwrap();

        assert!(!ensure_ignored(dir.path()).unwrap());
        let after_second = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_existing_entry_without_slash_counts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), ".claude-agents\n").unwrap();
        assert!(!ensure_ignored(dir.path()).unwrap());
    }
}
