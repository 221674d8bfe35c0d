#![allow(dead_code)]

//! Common test utilities for integration tests.
//!
//! Builds trackers wired to a [`RecordingAdapter`] and drives the event
//! loop under paused tokio time.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use whiteboard_info::adapters::mock::RecordingAdapter;
use whiteboard_info::prelude::*;

/// Refresh interval used by the loop fixtures.
pub const TEST_INTERVAL: Duration = Duration::from_millis(100);

/// A tracker running on its own event loop task.
pub struct RunningTracker {
    pub events: UnboundedSender<TrackerEvent>,
    pub recorder: RecordingAdapter,
    handle: JoinHandle<DisplayStateTracker<RecordingAdapter>>,
}

impl RunningTracker {
    /// Spawn a tracker with [`TEST_INTERVAL`] on the current runtime.
    pub fn spawn() -> Self {
        let (events, rx) = event_channel();
        let recorder = RecordingAdapter::new();
        let config = InfoConfig::default().with_refresh_interval(TEST_INTERVAL);
        let tracker = DisplayStateTracker::new(recorder.clone(), config, &events).unwrap();
        let handle = tokio::spawn(run_event_loop(tracker, rx));
        Self {
            events,
            recorder,
            handle,
        }
    }

    pub fn send(&self, event: TrackerEvent) {
        self.events.send(event).unwrap();
    }

    /// Let the loop drain its queue without moving the clock meaningfully.
    pub async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    /// Stop the loop and hand back the tracker.
    pub async fn shutdown(self) -> DisplayStateTracker<RecordingAdapter> {
        self.events.send(TrackerEvent::Shutdown).unwrap();
        self.handle.await.unwrap()
    }
}

/// A standalone tracker plus the sender that keeps its queue open.
pub fn standalone_tracker() -> (
    DisplayStateTracker<RecordingAdapter>,
    RecordingAdapter,
    UnboundedSender<TrackerEvent>,
) {
    let (tx, _rx) = event_channel();
    let recorder = RecordingAdapter::new();
    let tracker =
        DisplayStateTracker::new(recorder.clone(), InfoConfig::default(), &tx).unwrap();
    (tracker, recorder, tx)
}
