//! Laravel detection over composer.json

use super::{contains_any, read_manifest, DetectionRule};
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const COMPOSER_MANIFEST: &str = "composer.json";

/// Quote-inclusive literals matched against the raw composer.json text.
/// `"illuminate` is deliberately left unclosed so any `illuminate/*`
/// package key matches. Bare `laravel/framework` does NOT match `"laravel"`;
/// presence of composer.json alone is not enough (strict policy).
const COMPOSER_PATTERNS: &[&str] = &["\"laravel\"", "\"illuminate", "\"php\""];

pub struct LaravelRule;

impl DetectionRule for LaravelRule {
    fn name(&self) -> &'static str {
        "laravel"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        let text = read_manifest(fs, root, COMPOSER_MANIFEST)?;
        contains_any(&text, COMPOSER_PATTERNS).then_some(StackLabel::Laravel)
    }
}
