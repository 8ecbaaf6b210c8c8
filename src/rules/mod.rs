//! Detection rules
//!
//! One rule per technology, evaluated in a fixed order by the registry.
//! Every rule is a pure predicate over the project directory: a file or
//! directory existence check, optionally combined with a literal substring
//! test over that file's raw text. Nothing is parsed as structured data.
//!
//! A rule that cannot gather its evidence (missing file, read error) simply
//! does not match; rules never fail.

use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

mod expo;
mod golang;
mod laravel;
mod nextjs;
mod nodejs;
mod python;
mod rails;
mod react_native;
mod registry;

pub use expo::ExpoRule;
pub use golang::GoRule;
pub use laravel::LaravelRule;
pub use nextjs::NextJsRule;
pub use nodejs::NodeJsRule;
pub use python::PythonRule;
pub use rails::RailsRule;
pub use react_native::ReactNativeRule;
pub use registry::RuleRegistry;

/// A single stack-detection predicate.
pub trait DetectionRule: Send + Sync {
    /// Short identifier for log output.
    fn name(&self) -> &'static str;

    /// Evaluate against `root`. `detected` carries the labels contributed by
    /// earlier rules so that mutual exclusions are plain membership checks.
    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        detected: &StackResult,
    ) -> Option<StackLabel>;
}

/// Read a manifest file as raw text. Missing or unreadable files yield
/// `None`, which callers treat as a non-match.
pub(crate) fn read_manifest(fs: &dyn FileSystem, root: &Path, name: &str) -> Option<String> {
    let path = root.join(name);
    if !fs.is_file(&path) {
        return None;
    }
    fs.read_to_string(&path).ok()
}

/// Case-sensitive literal containment test against any of `patterns`.
pub(crate) fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
