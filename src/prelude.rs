//! Prelude module for convenient imports.
//!
//! ```ignore
//! use whiteboard_info::prelude::*;
//! ```

pub use crate::config::InfoConfig;
pub use crate::error::{InfoError, InfoResult};
pub use crate::models::{InfoSnapshot, Panel, Resolution, ServerInfoUpdate, UNKNOWN_USER_COUNT};
pub use crate::notifications::InfoNotification;
pub use crate::tracker::{event_channel, run_event_loop, DisplayStateTracker, TrackerEvent};
pub use crate::traits::PresentationAdapter;
