use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stack-aware installer for AI agent configurations
#[derive(Parser, Debug)]
#[command(
    name = "agentpack",
    about = "Stack-aware installer for AI agent configurations",
    version,
    long_about = "agentpack inspects a project's manifest files to detect its technology \
                  stack, then installs the matching set of JSON agent configurations \
                  into .claude-agents/. Detection never writes anything; install and \
                  update back up any existing configuration before overwriting."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error log output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of a project",
        long_about = "Inspects well-known manifest files (composer.json, package.json, \
                      next.config.*, app.json, requirements.txt, Gemfile, go.mod, ...) \
                      and prints the detected stack labels as a comma-separated list. \
                      Prints 'common' when nothing is recognized.\n\n\
                      Examples:\n  \
                      agentpack detect\n  \
                      agentpack detect /path/to/project\n  \
                      agentpack detect --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Install agent configurations for the detected stack",
        long_about = "Runs detection, expands the result into the agent bundle list, and \
                      materializes it under .claude-agents/. An existing install is backed \
                      up first.\n\n\
                      Examples:\n  \
                      agentpack install\n  \
                      agentpack install /path/to/project --dry-run\n  \
                      agentpack install --source ./claude-agents-main"
    )]
    Install(InstallArgs),

    #[command(
        about = "Re-detect and refresh installed agent configurations",
        long_about = "Backs up the current .claude-agents/ directory, re-runs detection \
                      and installs the current bundles from scratch."
    )]
    Update(UpdateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "labels",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct InstallArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Install from a local directory instead of fetching over HTTP"
    )]
    pub source: Option<PathBuf>,

    #[arg(long, help = "Print what would be installed without writing anything")]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Update from a local directory instead of fetching over HTTP"
    )]
    pub source: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Comma-separated stack labels (the machine contract)
    Labels,
    /// Labels plus the selected resources, as JSON
    Json,
}
