//! Stack detection over a project directory
//!
//! `StackDetector` runs every registered rule in order against a read-only
//! `FileSystem` view of the project root and assembles the unique labels
//! into a `StackResult`. Detection is total: missing or unreadable files are
//! ordinary non-matches, and a directory with no recognized manifest at all
//! detects as `common`.

use crate::fs::FileSystem;
use crate::rules::RuleRegistry;
use crate::stack::StackResult;
use std::path::Path;
use tracing::debug;

pub struct StackDetector<'a> {
    fs: &'a dyn FileSystem,
    registry: RuleRegistry,
}

impl<'a> StackDetector<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            registry: RuleRegistry::new(),
        }
    }

    /// Detect the stack labels for `root`.
    ///
    /// Pure with respect to the file system: the same directory state always
    /// yields the same result, and nothing is written or cached.
    pub fn detect(&self, root: &Path) -> StackResult {
        let mut result = StackResult::new();

        for rule in self.registry.rules() {
            if let Some(label) = rule.evaluate(self.fs, root, &result) {
                if result.push(label) {
                    debug!(rule = rule.name(), label = %label, "rule matched");
                }
            }
        }

        let result = result.normalized();
        debug!(root = %root.display(), labels = %result.to_csv(), "detection finished");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::stack::StackLabel;
    use std::path::PathBuf;

    fn detect(fs: &MockFileSystem) -> StackResult {
        StackDetector::new(fs).detect(&PathBuf::from("/repo"))
    }

    #[test]
    fn test_empty_project_detects_common() {
        let result = detect(&MockFileSystem::new());
        assert_eq!(result.labels(), &[StackLabel::Common]);
    }

    #[test]
    fn test_unrecognized_manifests_detect_common() {
        let fs = MockFileSystem::new()
            .with_file("/repo/README.md", "# hello")
            .with_file("/repo/Makefile", "all:\n");
        assert_eq!(detect(&fs).to_csv(), "common");
    }

    #[test]
    fn test_detection_is_idempotent() {
        let fs = MockFileSystem::new().with_file("/repo/go.mod", "module example.com/app\n");
        let detector = StackDetector::new(&fs);
        let first = detector.detect(&PathBuf::from("/repo"));
        let second = detector.detect(&PathBuf::from("/repo"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_expo_suppresses_react_native() {
        let fs = MockFileSystem::new()
            .with_file("/repo/app.json", r#"{"expo": {"name": "app"}}"#)
            .with_dir("/repo/ios");
        let result = detect(&fs);
        assert_eq!(result.labels(), &[StackLabel::Expo]);
    }

    #[test]
    fn test_nextjs_suppresses_generic_nodejs() {
        let fs = MockFileSystem::new()
            .with_file("/repo/next.config.js", "module.exports = {}")
            .with_file(
                "/repo/package.json",
                r#"{"dependencies": {"express": "^4.18.0"}}"#,
            );
        let result = detect(&fs);
        assert_eq!(result.labels(), &[StackLabel::NextJs]);
    }

    #[test]
    fn test_go_only_project() {
        let fs = MockFileSystem::new().with_file("/repo/go.mod", "module example.com/app\n");
        assert_eq!(detect(&fs).labels(), &[StackLabel::Go]);
    }

    #[test]
    fn test_polyglot_project_keeps_rule_order() {
        // Rails before Go in directory terms, but rule order pins the output.
        let fs = MockFileSystem::new()
            .with_file("/repo/go.mod", "module example.com/app\n")
            .with_file("/repo/Gemfile", "gem 'rails'\n")
            .with_file(
                "/repo/composer.json",
                r#"{"require": {"illuminate/support": "^10.0"}}"#,
            );
        let result = detect(&fs);
        assert_eq!(
            result.labels(),
            &[StackLabel::Laravel, StackLabel::Rails, StackLabel::Go]
        );
        assert_eq!(result.to_csv(), "laravel,rails,go");
    }

    #[test]
    fn test_django_elif_exclusivity_end_to_end() {
        let fs = MockFileSystem::new()
            .with_file("/repo/requirements.txt", "django==4.2\nfastapi==0.110\n");
        assert_eq!(detect(&fs).labels(), &[StackLabel::Django]);
    }

    #[test]
    fn test_laravel_framework_only_composer_detects_common() {
        // Strict substring policy: laravel/framework alone is not evidence.
        let fs = MockFileSystem::new().with_file(
            "/repo/composer.json",
            r#"{"require": {"laravel/framework": "^10.0"}}"#,
        );
        assert_eq!(detect(&fs).to_csv(), "common");
    }
}
