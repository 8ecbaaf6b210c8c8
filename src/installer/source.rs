//! Where agent resources come from
//!
//! Either an HTTP base URL (the configuration repository's raw-content root)
//! or a local directory laid out the same way, typically an extracted
//! release archive. Both expose the same fetch-by-resource call.

use crate::agents::AgentResource;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed")]
    Http(#[from] reqwest::Error),

    #[error("resource not found in local source: {0}")]
    LocalNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fetches resources over HTTP from `<base_url>/agents/<dir>/<name>.json`.
pub struct RemoteSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn fetch(&self, resource: &AgentResource) -> Result<Vec<u8>, SourceError> {
        let url = format!("{}/{}", self.base_url, resource.remote_path());
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Copies resources out of a local directory with the repository layout.
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn fetch(&self, resource: &AgentResource) -> Result<Vec<u8>, SourceError> {
        let path = self.root.join(resource.remote_path());
        if !path.is_file() {
            return Err(SourceError::LocalNotFound(path));
        }
        Ok(std::fs::read(path)?)
    }
}

pub enum AgentSource {
    Remote(RemoteSource),
    Local(LocalSource),
}

impl AgentSource {
    pub fn remote(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self::Remote(RemoteSource::new(base_url, timeout)?))
    }

    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::Local(LocalSource::new(root))
    }

    pub fn fetch(&self, resource: &AgentResource) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::Remote(remote) => remote.fetch(resource),
            Self::Local(local) => local.fetch(resource),
        }
    }
}
