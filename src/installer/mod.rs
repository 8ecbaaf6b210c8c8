//! Materializing an agent manifest into a project
//!
//! The installer is the side-effecting collaborator around the pure
//! detect/select core: it backs up any existing install directory, fetches
//! or copies every manifest resource into `.claude-agents/`, keeps the
//! directory out of version control, and scaffolds the update workflow.

use crate::agents::AgentManifest;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

mod backup;
mod gitignore;
mod source;

pub use backup::backup_existing;
pub use gitignore::ensure_ignored;
pub use source::{AgentSource, LocalSource, RemoteSource, SourceError};

/// Install directory created under the project root.
pub const INSTALL_DIR: &str = ".claude-agents";

const WORKFLOW_PATH: &str = ".github/workflows/update-agents.yml";
const WORKFLOW_TEMPLATE: &str = "\
name: Update agents

on:
  schedule:
    - cron: '0 6 * * 1'
  workflow_dispatch:

jobs:
  update:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Update agent configurations
        run: agentpack update
";

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to fetch {resource}")]
    Fetch {
        resource: String,
        #[source]
        source: SourceError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What an install pass actually did.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: Vec<PathBuf>,
    pub backup: Option<PathBuf>,
    pub gitignore_updated: bool,
    pub workflow_scaffolded: bool,
}

pub struct Installer {
    source: AgentSource,
}

impl Installer {
    pub fn new(source: AgentSource) -> Self {
        Self { source }
    }

    /// Materialize `manifest` under `project_root`.
    ///
    /// Any existing install directory is moved aside first, so a failure
    /// mid-install leaves the previous state recoverable from the backup.
    pub fn install(
        &self,
        project_root: &Path,
        manifest: &AgentManifest,
    ) -> Result<InstallReport, InstallError> {
        let install_dir = project_root.join(INSTALL_DIR);
        let mut report = InstallReport {
            backup: backup_existing(&install_dir)?,
            ..Default::default()
        };

        for resource in manifest.iter() {
            let bytes = self
                .source
                .fetch(resource)
                .map_err(|source| InstallError::Fetch {
                    resource: resource.remote_path(),
                    source,
                })?;

            let dest = install_dir.join(resource.install_path());
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, bytes)?;
            debug!(resource = %resource.remote_path(), "installed");
            report.installed.push(dest);
        }

        report.gitignore_updated = ensure_ignored(project_root)?;
        report.workflow_scaffolded = self.scaffold_workflow(project_root)?;

        info!(
            count = report.installed.len(),
            backup = report.backup.is_some(),
            "install finished"
        );
        Ok(report)
    }

    /// Update is install with a fresh detection pass upstream: the backup of
    /// the previous install happens inside `install`.
    pub fn update(
        &self,
        project_root: &Path,
        manifest: &AgentManifest,
    ) -> Result<InstallReport, InstallError> {
        self.install(project_root, manifest)
    }

    fn scaffold_workflow(&self, project_root: &Path) -> Result<bool, InstallError> {
        let path = project_root.join(WORKFLOW_PATH);
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, WORKFLOW_TEMPLATE)?;
        Ok(true)
    }
}
