//! agentpack - stack-aware installer for AI agent configurations
//!
//! This library detects a project's technology stack from its manifest files
//! and maps the result onto the agent configuration bundles to install.
//!
//! # Core Concepts
//!
//! - **Detection**: a fixed, ordered list of rules, each a pure predicate
//!   over the project directory (file existence plus literal substring tests
//!   over raw manifest text). No manifest is parsed as structured data.
//! - **Stack labels**: the closed set of technologies detection can name;
//!   an empty detection normalizes to `common`.
//! - **Selection**: a total mapping from labels to resource bundles. Every
//!   project gets the common bundle; labels without a dedicated bundle add
//!   nothing.
//! - **Installation**: a side-effecting collaborator that materializes the
//!   selected resources under `.claude-agents/`, backing up any previous
//!   install first.
//!
//! # Example Usage
//!
//! ```no_run
//! use agentpack::{AgentSelector, StackDetector, StdFileSystem};
//! use std::path::Path;
//!
//! let fs = StdFileSystem;
//! let result = StackDetector::new(&fs).detect(Path::new("."));
//! println!("{}", result.to_csv());
//!
//! let manifest = AgentSelector::new().select(&result);
//! for resource in manifest.iter() {
//!     println!("{}", resource.remote_path());
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`rules`]: the individual detection rules and their fixed ordering
//! - [`detector`]: runs the rules and assembles the result
//! - [`agents`]: resource identifiers and label-to-bundle selection
//! - [`installer`]: fetch/copy, backup, `.gitignore` marker, workflow scaffold

// Public modules
pub mod agents;
pub mod cli;
pub mod config;
pub mod detector;
pub mod fs;
pub mod installer;
pub mod rules;
pub mod stack;
pub mod util;

// Re-export key types for convenient access
pub use agents::{AgentManifest, AgentResource, AgentSelector};
pub use config::{AgentpackConfig, ConfigError};
pub use detector::StackDetector;
pub use fs::{FileSystem, MockFileSystem, StdFileSystem};
pub use installer::{AgentSource, InstallError, InstallReport, Installer};
pub use stack::{StackLabel, StackResult};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
