//! Go detection via go.mod

use super::DetectionRule;
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const GO_MANIFEST: &str = "go.mod";

pub struct GoRule;

impl DetectionRule for GoRule {
    fn name(&self) -> &'static str {
        "go"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        fs.is_file(&root.join(GO_MANIFEST)).then_some(StackLabel::Go)
    }
}
