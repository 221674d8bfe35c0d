//! Mock implementations for testing.
//!
//! - [`RecordingAdapter`] - records every notification in memory

pub mod recording;

pub use recording::RecordingAdapter;
