//! Configuration for the installer
//!
//! Settings come from environment variables with defaults. The detection and
//! selection core takes no configuration at all; everything here belongs to
//! the fetch/install layer.
//!
//! # Environment Variables
//!
//! - `CONFIG_REPO`: base URL of the agent configuration repository
//!   (raw-content root) - default: the canonical repository
//! - `CONFIG_BRANCH`: branch appended to the base URL - default: "main"
//! - `AGENTPACK_REQUEST_TIMEOUT`: HTTP timeout in seconds - default: "30"

use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_REPO: &str =
    "https://raw.githubusercontent.com/agentpack/claude-agents";
const DEFAULT_CONFIG_BRANCH: &str = "main";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_CONFIG_REPO: &str = "CONFIG_REPO";
pub const ENV_CONFIG_BRANCH: &str = "CONFIG_BRANCH";
pub const ENV_REQUEST_TIMEOUT: &str = "AGENTPACK_REQUEST_TIMEOUT";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CONFIG_REPO must not be empty")]
    EmptyRepo,

    #[error("CONFIG_REPO must be an http(s) URL, got '{0}'")]
    InvalidRepoUrl(String),

    #[error("invalid AGENTPACK_REQUEST_TIMEOUT value '{0}': expected seconds")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct AgentpackConfig {
    pub config_repo: String,
    pub config_branch: String,
    pub request_timeout: Duration,
}

impl AgentpackConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config_repo =
            env::var(ENV_CONFIG_REPO).unwrap_or_else(|_| DEFAULT_CONFIG_REPO.to_string());
        let config_branch =
            env::var(ENV_CONFIG_BRANCH).unwrap_or_else(|_| DEFAULT_CONFIG_BRANCH.to_string());

        let request_timeout = match env::var(ENV_REQUEST_TIMEOUT) {
            Ok(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let config = Self {
            config_repo,
            config_branch,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Base URL resources are fetched under: `<repo>/<branch>`.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.config_repo.trim_end_matches('/'),
            self.config_branch
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_repo.trim().is_empty() {
            return Err(ConfigError::EmptyRepo);
        }
        if !self.config_repo.starts_with("http://") && !self.config_repo.starts_with("https://") {
            return Err(ConfigError::InvalidRepoUrl(self.config_repo.clone()));
        }
        Ok(())
    }
}

impl Default for AgentpackConfig {
    fn default() -> Self {
        Self {
            config_repo: DEFAULT_CONFIG_REPO.to_string(),
            config_branch: DEFAULT_CONFIG_BRANCH.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
