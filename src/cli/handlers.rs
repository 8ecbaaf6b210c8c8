//! Command handlers
//!
//! Each handler returns a process exit code; errors are logged, never
//! propagated past this layer.

use crate::agents::AgentSelector;
use crate::cli::commands::{DetectArgs, InstallArgs, UpdateArgs};
use crate::cli::output::OutputFormatter;
use crate::config::AgentpackConfig;
use crate::detector::StackDetector;
use crate::fs::StdFileSystem;
use crate::installer::{AgentSource, InstallReport, Installer, INSTALL_DIR};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn project_root(path: &Option<PathBuf>) -> PathBuf {
    path.clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn handle_detect(args: &DetectArgs) -> i32 {
    let root = project_root(&args.path);
    let fs = StdFileSystem;
    let result = StackDetector::new(&fs).detect(&root);
    let manifest = AgentSelector::new().select(&result);

    match OutputFormatter::new(args.format).format(&result, &manifest) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            error!("failed to format detection result: {e:#}");
            1
        }
    }
}

pub fn handle_install(args: &InstallArgs) -> i32 {
    match run_install(&project_root(&args.path), &args.source, args.dry_run, false) {
        Ok(()) => 0,
        Err(e) => {
            error!("install failed: {e:#}");
            1
        }
    }
}

pub fn handle_update(args: &UpdateArgs) -> i32 {
    match run_install(&project_root(&args.path), &args.source, false, true) {
        Ok(()) => 0,
        Err(e) => {
            error!("update failed: {e:#}");
            1
        }
    }
}

fn run_install(
    root: &Path,
    local_source: &Option<PathBuf>,
    dry_run: bool,
    is_update: bool,
) -> Result<()> {
    let fs = StdFileSystem;
    let result = StackDetector::new(&fs).detect(root);
    let manifest = AgentSelector::new().select(&result);
    info!(labels = %result.to_csv(), resources = manifest.len(), "resolved agent manifest");

    if dry_run {
        println!("Detected stack: {}", result.to_csv());
        for resource in manifest.iter() {
            println!("{}", resource.remote_path());
        }
        return Ok(());
    }

    let source = match local_source {
        Some(dir) => AgentSource::local(dir),
        None => {
            let config = AgentpackConfig::from_env()?;
            AgentSource::remote(config.base_url(), config.request_timeout)?
        }
    };

    let installer = Installer::new(source);
    let report = if is_update {
        installer.update(root, &manifest)?
    } else {
        installer.install(root, &manifest)?
    };
    print_report(root, &result.to_csv(), &report, is_update);
    Ok(())
}

fn print_report(root: &Path, labels: &str, report: &InstallReport, is_update: bool) {
    let verb = if is_update { "Updated" } else { "Installed" };
    println!(
        "{verb} {} agent configurations for [{labels}] in {}",
        report.installed.len(),
        root.join(INSTALL_DIR).display()
    );
    if let Some(backup) = &report.backup {
        println!("Previous configuration saved to {}", backup.display());
    }
}
