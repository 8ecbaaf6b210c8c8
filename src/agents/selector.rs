//! Label-to-bundle mapping

use super::{AgentManifest, AgentResource};
use crate::stack::{StackLabel, StackResult};

/// Installed for every project, before any stack bundle.
pub const COMMON_BUNDLE: &[AgentResource] = &[
    AgentResource::new("common", "team-lead-orchestrator"),
    AgentResource::new("common", "code-implementer"),
    AgentResource::new("common", "code-reviewer"),
    AgentResource::new("common", "security-auditor"),
];

const LARAVEL_BUNDLE: &[AgentResource] = &[
    AgentResource::new("laravel", "laravel-fullstack-dev"),
    AgentResource::new("laravel", "laravel-backend-architect"),
];

/// Shared by the nextjs and nodejs labels; selection via both is idempotent.
const NODE_BUNDLE: &[AgentResource] = &[
    AgentResource::new("nodejs", "nextjs-fullstack-dev"),
    AgentResource::new("nodejs", "nodejs-backend-dev"),
];

/// Shared by the reactnative and expo labels.
const MOBILE_BUNDLE: &[AgentResource] = &[
    AgentResource::new("reactnative", "react-native-dev"),
    AgentResource::new("reactnative", "expo-dev"),
];

/// Bundle for one label. Labels without a dedicated bundle (django, flask,
/// fastapi, rails, go, common) contribute nothing beyond the common set, so
/// the mapping stays total as the label set grows.
fn bundle_for(label: StackLabel) -> &'static [AgentResource] {
    match label {
        StackLabel::Laravel => LARAVEL_BUNDLE,
        StackLabel::NextJs | StackLabel::NodeJs => NODE_BUNDLE,
        StackLabel::ReactNative | StackLabel::Expo => MOBILE_BUNDLE,
        _ => &[],
    }
}

/// Expands a detection result into the ordered install manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentSelector;

impl AgentSelector {
    pub fn new() -> Self {
        Self
    }

    /// Total and pure: common bundle first, then per-label bundles in the
    /// result's encounter order, duplicates collapsed.
    pub fn select(&self, result: &StackResult) -> AgentManifest {
        let mut manifest = AgentManifest::new();

        for resource in COMMON_BUNDLE {
            manifest.push(*resource);
        }
        for label in result.iter() {
            for resource in bundle_for(label) {
                manifest.push(*resource);
            }
        }

        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(manifest: &AgentManifest) -> Vec<&'static str> {
        manifest.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_every_label_gets_the_common_bundle() {
        let selector = AgentSelector::new();
        for label in StackLabel::all() {
            let result: StackResult = [*label].into_iter().collect();
            let manifest = selector.select(&result);
            for resource in COMMON_BUNDLE {
                assert!(
                    manifest.contains(resource),
                    "label {label} is missing common resource {}",
                    resource.name
                );
            }
        }
    }

    #[test]
    fn test_common_only_for_labels_without_bundles() {
        let selector = AgentSelector::new();
        for label in [
            StackLabel::Django,
            StackLabel::Flask,
            StackLabel::FastApi,
            StackLabel::Rails,
            StackLabel::Go,
            StackLabel::Common,
        ] {
            let result: StackResult = [label].into_iter().collect();
            assert_eq!(selector.select(&result).len(), COMMON_BUNDLE.len());
        }
    }

    #[test]
    fn test_laravel_bundle_follows_common() {
        let result: StackResult = [StackLabel::Laravel].into_iter().collect();
        let manifest = AgentSelector::new().select(&result);
        assert_eq!(
            names(&manifest),
            vec![
                "team-lead-orchestrator",
                "code-implementer",
                "code-reviewer",
                "security-auditor",
                "laravel-fullstack-dev",
                "laravel-backend-architect",
            ]
        );
    }

    #[test]
    fn test_nextjs_and_nodejs_share_one_bundle() {
        let result: StackResult = [StackLabel::NextJs, StackLabel::NodeJs].into_iter().collect();
        let manifest = AgentSelector::new().select(&result);

        let node_names: Vec<_> = manifest
            .iter()
            .filter(|r| r.dir == "nodejs")
            .map(|r| r.name)
            .collect();
        assert_eq!(node_names, vec!["nextjs-fullstack-dev", "nodejs-backend-dev"]);
    }

    #[test]
    fn test_manifest_order_follows_detector_label_order() {
        // Same labels, both orders a detector pass could produce.
        let laravel_first: StackResult =
            [StackLabel::Laravel, StackLabel::ReactNative].into_iter().collect();
        let mobile_first: StackResult =
            [StackLabel::ReactNative, StackLabel::Laravel].into_iter().collect();

        let selector = AgentSelector::new();
        let a = names(&selector.select(&laravel_first));
        let b = names(&selector.select(&mobile_first));

        assert_eq!(
            &a[COMMON_BUNDLE.len()..],
            &["laravel-fullstack-dev", "laravel-backend-architect", "react-native-dev", "expo-dev"]
        );
        assert_eq!(
            &b[COMMON_BUNDLE.len()..],
            &["react-native-dev", "expo-dev", "laravel-fullstack-dev", "laravel-backend-architect"]
        );
    }

    #[test]
    fn test_go_only_selects_just_the_common_set() {
        let result: StackResult = [StackLabel::Go].into_iter().collect();
        let manifest = AgentSelector::new().select(&result);
        assert_eq!(manifest.len(), 4);
        assert!(manifest.iter().all(|r| r.dir == "common"));
    }

    #[test]
    fn test_expo_and_reactnative_would_dedup() {
        // The detector never emits both, but the selector must still be
        // idempotent if handed the pair.
        let result: StackResult =
            [StackLabel::Expo, StackLabel::ReactNative].into_iter().collect();
        let manifest = AgentSelector::new().select(&result);
        assert_eq!(manifest.len(), COMMON_BUNDLE.len() + MOBILE_BUNDLE.len());
    }
}
