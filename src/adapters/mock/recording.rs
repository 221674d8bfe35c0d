//! Recording presentation adapter for testing.
//!
//! Stores every notification in memory so tests can assert on exactly
//! what the tracker emitted, and in what order.

use std::sync::{Arc, Mutex};

use crate::models::{InfoSnapshot, Panel};
use crate::notifications::InfoNotification;
use crate::traits::PresentationAdapter;

/// In-memory notification recorder.
///
/// Cloning shares the underlying buffer, so a clone can be handed to the
/// tracker while the test keeps another to inspect.
///
/// # Example
///
/// ```
/// use whiteboard_info::adapters::mock::RecordingAdapter;
/// use whiteboard_info::config::InfoConfig;
/// use whiteboard_info::models::Panel;
/// use whiteboard_info::tracker::{event_channel, DisplayStateTracker};
///
/// let recorder = RecordingAdapter::new();
/// let (events, _rx) = event_channel();
/// let mut tracker =
///     DisplayStateTracker::new(recorder.clone(), InfoConfig::default(), &events).unwrap();
/// tracker.show(Panel::Size);
/// assert_eq!(recorder.visibility_changes(), vec![(Panel::Size, true)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    notifications: Arc<Mutex<Vec<InfoNotification>>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn notifications(&self) -> Vec<InfoNotification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Number of notifications recorded.
    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }

    /// Only the visibility-changed notifications, as `(panel, visible)`.
    pub fn visibility_changes(&self) -> Vec<(Panel, bool)> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                InfoNotification::VisibilityChanged { panel, visible } => Some((panel, visible)),
                _ => None,
            })
            .collect()
    }

    /// Only the user-count-changed notifications.
    pub fn user_count_changes(&self) -> Vec<i64> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                InfoNotification::UserCountChanged { new_count } => Some(new_count),
                _ => None,
            })
            .collect()
    }

    /// Only the snapshot-refresh notifications.
    pub fn snapshots(&self) -> Vec<InfoSnapshot> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                InfoNotification::SnapshotRefresh { snapshot } => Some(snapshot),
                _ => None,
            })
            .collect()
    }
}

impl PresentationAdapter for RecordingAdapter {
    fn notify(&self, notification: InfoNotification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
