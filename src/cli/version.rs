//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help`.
pub const USAGE: &str = "\
usage: whiteboard-info [--config <file.json>]

Reads commands on stdin, one per line, and writes notifications as JSON lines:
  show <panel> | hide <panel> | toggle <panel>
  sent | received
  server <json>
  quit

Panels: info, size, rectangle-shapes, lines, upload-options, save-options";

pub fn version_string() -> String {
    format!("whiteboard-info {}", VERSION)
}
