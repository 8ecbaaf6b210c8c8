//! Generic Node.js backend detection over package.json

use super::{contains_any, read_manifest, DetectionRule};
use crate::fs::FileSystem;
use crate::stack::{StackLabel, StackResult};
use std::path::Path;

const PACKAGE_MANIFEST: &str = "package.json";

/// Quote-inclusive dependency keys of the recognized server frameworks.
const SERVER_PATTERNS: &[&str] = &[
    "\"express\"",
    "\"fastify\"",
    "\"koa\"",
    "\"hapi\"",
    "\"nest\"",
    "\"nestjs\"",
];

/// Skipped entirely when Next.js already matched: a Next.js project always
/// has a package.json, and the Next bundle covers it.
pub struct NodeJsRule;

impl DetectionRule for NodeJsRule {
    fn name(&self) -> &'static str {
        "nodejs"
    }

    fn evaluate(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        detected: &StackResult,
    ) -> Option<StackLabel> {
        if detected.contains(StackLabel::NextJs) {
            return None;
        }
        let text = read_manifest(fs, root, PACKAGE_MANIFEST)?;
        contains_any(&text, SERVER_PATTERNS).then_some(StackLabel::NodeJs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;
    use yare::parameterized;

    #[parameterized(
        express = { r#"{"dependencies": {"express": "^4.18.0"}}"# },
        fastify = { r#"{"dependencies": {"fastify": "^4.0.0"}}"# },
        koa = { r#"{"dependencies": {"koa": "^2.14.0"}}"# },
        hapi = { r#"{"dependencies": {"hapi": "^21.0.0"}}"# },
        nest = { r#"{"dependencies": {"nest": "1.0.0"}}"# },
        nestjs = { r#"{"dependencies": {"nestjs": "1.0.0"}}"# },
    )]
    fn test_server_framework_matches(package_json: &str) {
        let fs = MockFileSystem::new().with_file("/repo/package.json", package_json);
        let label = NodeJsRule.evaluate(&fs, &PathBuf::from("/repo"), &StackResult::new());
        assert_eq!(label, Some(StackLabel::NodeJs));
    }

    #[test]
    fn test_frontend_only_package_json_no_match() {
        let fs = MockFileSystem::new()
            .with_file("/repo/package.json", r#"{"dependencies": {"react": "^18"}}"#);
        let label = NodeJsRule.evaluate(&fs, &PathBuf::from("/repo"), &StackResult::new());
        assert_eq!(label, None);
    }

    #[test]
    fn test_suppressed_when_nextjs_already_detected() {
        let fs = MockFileSystem::new().with_file(
            "/repo/package.json",
            r#"{"dependencies": {"express": "^4.18.0"}}"#,
        );
        let detected: StackResult = [StackLabel::NextJs].into_iter().collect();
        let label = NodeJsRule.evaluate(&fs, &PathBuf::from("/repo"), &detected);
        assert_eq!(label, None);
    }

    #[test]
    fn test_no_package_json_no_match() {
        let label =
            NodeJsRule.evaluate(&MockFileSystem::new(), &PathBuf::from("/repo"), &StackResult::new());
        assert_eq!(label, None);
    }
}
