//! CLI module for the whiteboard-info driver.
//!
//! - Argument parsing ([`parse_args`])
//! - Version and usage text
//! - Stdin command parsing ([`parse_command`])

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use commands::parse_command;
pub use version::{version_string, USAGE, VERSION};
