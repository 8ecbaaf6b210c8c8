//! Python web framework detection
//!
//! Django, Flask and FastAPI are mutually exclusive by construction: the
//! checks form a strict else-if chain over one requirements file, first
//! match wins.

use super::{contains_any, read_manifest, DetectionRule};
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

/// Checked in order; the first one present is THE requirements file whose
/// text feeds the chain below.
const PYTHON_MANIFESTS: &[&str] = &["requirements.txt", "pyproject.toml", "Pipfile"];

const DJANGO_SENTINEL: &str = "manage.py";

pub struct PythonRule;

impl DetectionRule for PythonRule {
    fn name(&self) -> &'static str {
        "python"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        let manifest = PYTHON_MANIFESTS
            .iter()
            .find(|name| fs.is_file(&root.join(name)))?;

        // An unreadable requirements file still leaves the manage.py check.
        let text = read_manifest(fs, root, manifest).unwrap_or_default();

        if fs.is_file(&root.join(DJANGO_SENTINEL)) || text.contains("django") {
            Some(StackLabel::Django)
        } else if contains_any(&text, &["flask", "Flask"]) {
            Some(StackLabel::Flask)
        } else if contains_any(&text, &["fastapi", "uvicorn"]) {
            Some(StackLabel::FastApi)
        } else {
            None
        }
    }
}
