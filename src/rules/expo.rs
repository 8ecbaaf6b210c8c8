//! Expo detection over app.json

use super::{read_manifest, DetectionRule};
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const APP_MANIFEST: &str = "app.json";

pub struct ExpoRule;

impl DetectionRule for ExpoRule {
    fn name(&self) -> &'static str {
        "expo"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        let text = read_manifest(fs, root, APP_MANIFEST)?;
        text.contains("expo").then_some(StackLabel::Expo)
    }
}
