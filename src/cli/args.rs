//! Command-line argument parsing for the whiteboard-info driver.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the driver, optionally with a JSON config file
    Run { config_path: Option<PathBuf> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use whiteboard_info::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["whiteboard-info".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut config_path = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--config" | "-c" => config_path = args.next().map(PathBuf::from),
            _ => {}
        }
    }
    CliCommand::Run { config_path }
}
