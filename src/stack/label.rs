//! Stack label identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Technology stack identifier produced by detection.
///
/// The set is closed: labels only come out of the detector, and the selector
/// is total over them, so there is no open/custom variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackLabel {
    Laravel,
    NextJs,
    NodeJs,
    Expo,
    ReactNative,
    Django,
    Flask,
    FastApi,
    Rails,
    Go,
    /// Fallback when nothing else matched
    Common,
}

impl StackLabel {
    /// Wire name, as emitted on stdout and used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laravel => "laravel",
            Self::NextJs => "nextjs",
            Self::NodeJs => "nodejs",
            Self::Expo => "expo",
            Self::ReactNative => "reactnative",
            Self::Django => "django",
            Self::Flask => "flask",
            Self::FastApi => "fastapi",
            Self::Rails => "rails",
            Self::Go => "go",
            Self::Common => "common",
        }
    }

    /// Human-readable name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Laravel => "Laravel",
            Self::NextJs => "Next.js",
            Self::NodeJs => "Node.js",
            Self::Expo => "Expo",
            Self::ReactNative => "React Native",
            Self::Django => "Django",
            Self::Flask => "Flask",
            Self::FastApi => "FastAPI",
            Self::Rails => "Rails",
            Self::Go => "Go",
            Self::Common => "Common",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == s)
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Laravel,
            Self::NextJs,
            Self::NodeJs,
            Self::Expo,
            Self::ReactNative,
            Self::Django,
            Self::Flask,
            Self::FastApi,
            Self::Rails,
            Self::Go,
            Self::Common,
        ]
    }
}

impl fmt::Display for StackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
