pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DetectArgs, InstallArgs, OutputFormatArg, UpdateArgs};
pub use output::OutputFormatter;
