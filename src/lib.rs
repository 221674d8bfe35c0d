//! whiteboard-info - display state tracking for a collaborative whiteboard
//!
//! This library exposes modules for use by the driver binary and in
//! integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod notifications;
pub mod prelude;
pub mod tracker;
pub mod traits;
