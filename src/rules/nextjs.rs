//! Next.js detection over next.config.* files

use super::DetectionRule;
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const NEXT_CONFIGS: &[&str] = &["next.config.js", "next.config.mjs", "next.config.ts"];

pub struct NextJsRule;

impl DetectionRule for NextJsRule {
    fn name(&self) -> &'static str {
        "nextjs"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        NEXT_CONFIGS
            .iter()
            .any(|name| fs.is_file(&root.join(name)))
            .then_some(StackLabel::NextJs)
    }
}
