//! Agent resource selection
//!
//! Maps detected stack labels onto the fixed bundles of agent configuration
//! files to install.

mod manifest;
mod selector;

pub use manifest::{AgentManifest, AgentResource};
pub use selector::AgentSelector;
