//! Concrete implementations of [`PresentationAdapter`](crate::traits::PresentationAdapter).
//!
//! # Adapters
//!
//! - `mpsc::UnboundedSender<InfoNotification>` - forwards to a UI task
//! - [`JsonLinesAdapter`] - one JSON object per line on any writer
//!
//! # Mock Implementations
//!
//! - [`mock::RecordingAdapter`] - in-memory recorder for tests

pub mod channel;
pub mod json_lines;
pub mod mock;

pub use channel::notification_channel;
pub use json_lines::JsonLinesAdapter;
pub use mock::RecordingAdapter;
