//! Output formatting for detection results
//!
//! The `labels` format is a hard contract: existing callers pipe it, so it
//! must be exactly the comma-separated label list and nothing else.

use anyhow::{Context, Result};
use serde_json::json;

use crate::agents::AgentManifest;
use crate::cli::commands::OutputFormatArg;
use crate::stack::StackResult;

pub struct OutputFormatter {
    format: OutputFormatArg,
}

impl OutputFormatter {
    pub fn new(format: OutputFormatArg) -> Self {
        Self { format }
    }

    pub fn format(&self, result: &StackResult, manifest: &AgentManifest) -> Result<String> {
        match self.format {
            OutputFormatArg::Labels => Ok(result.to_csv()),
            OutputFormatArg::Json => self.format_json(result, manifest),
        }
    }

    fn format_json(&self, result: &StackResult, manifest: &AgentManifest) -> Result<String> {
        let resources: Vec<_> = manifest
            .iter()
            .map(|r| {
                json!({
                    "dir": r.dir,
                    "name": r.name,
                    "path": r.remote_path(),
                })
            })
            .collect();

        serde_json::to_string_pretty(&json!({
            "labels": result,
            "resources": resources,
        }))
        .context("failed to serialize detection result")
    }
}
