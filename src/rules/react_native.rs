//! Bare React Native detection via the native platform directories

use super::DetectionRule;
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const PLATFORM_DIRS: &[&str] = &["android", "ios"];

/// Skipped when Expo already matched: an Expo project may carry prebuilt
/// `android`/`ios` directories and must not be double-labeled.
pub struct ReactNativeRule;

impl DetectionRule for ReactNativeRule {
    fn name(&self) -> &'static str {
        "reactnative"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        detected: &StackResult,
    ) -> Option<StackLabel> {
        if detected.contains(StackLabel::Expo) {
            return None;
        }
        PLATFORM_DIRS
            .iter()
            .any(|dir| fs.is_dir(&root.join(dir)))
            .then_some(StackLabel::ReactNative)
    }
}
