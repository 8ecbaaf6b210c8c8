//! Resource identifiers and the ordered install manifest

use serde::Serialize;
use std::path::PathBuf;

/// Logical identity of one agent configuration file.
///
/// `dir` is the bundle namespace and `name` the file stem; together they fix
/// both the remote fetch path and the local install path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentResource {
    pub dir: &'static str,
    pub name: &'static str,
}

impl AgentResource {
    pub const fn new(dir: &'static str, name: &'static str) -> Self {
        Self { dir, name }
    }

    /// Path component appended to the configured base URL when fetching.
    pub fn remote_path(&self) -> String {
        format!("agents/{}/{}.json", self.dir, self.name)
    }

    /// Destination relative to the install directory.
    pub fn install_path(&self) -> PathBuf {
        PathBuf::from("agents").join(self.dir).join(self.file_name())
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

/// Ordered, de-duplicated list of resources to materialize.
///
/// Order is load-bearing: common resources come first, then bundles in the
/// label order the detector produced. Duplicates (the shared nextjs/nodejs
/// bundle selected via both labels) collapse to their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgentManifest {
    resources: Vec<AgentResource>,
}

impl AgentManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: AgentResource) -> bool {
        if self.resources.contains(&resource) {
            return false;
        }
        self.resources.push(resource);
        true
    }

    pub fn contains(&self, resource: &AgentResource) -> bool {
        self.resources.contains(resource)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentResource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> &[AgentResource] {
        &self.resources
    }
}
