//! Ruby on Rails detection over the Gemfile

use super::{read_manifest, DetectionRule};
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const GEMFILE: &str = "Gemfile";

/// Quote-inclusive literal matching `gem 'rails'` declarations.
const RAILS_PATTERN: &str = "'rails'";

pub struct RailsRule;

impl DetectionRule for RailsRule {
    fn name(&self) -> &'static str {
        "rails"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        _detected: &StackResult,
    ) -> Option<StackLabel> {
        let text = read_manifest(fs, root, GEMFILE)?;
        text.contains(RAILS_PATTERN).then_some(StackLabel::Rails)
    }
}
