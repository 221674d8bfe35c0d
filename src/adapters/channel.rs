//! Channel-backed presentation adapter.
//!
//! Forwards notifications into an unbounded mpsc channel so a UI task
//! can render them on its own schedule.

use tokio::sync::mpsc;

use crate::notifications::InfoNotification;
use crate::traits::PresentationAdapter;

impl PresentationAdapter for mpsc::UnboundedSender<InfoNotification> {
    fn notify(&self, notification: InfoNotification) {
        let kind = notification.kind();
        if self.send(notification).is_err() {
            tracing::debug!("Notification receiver dropped, discarding {}", kind);
        }
    }
}

/// Create a channel adapter and the receiver the UI side reads from.
pub fn notification_channel() -> (
    mpsc::UnboundedSender<InfoNotification>,
    mpsc::UnboundedReceiver<InfoNotification>,
) {
    mpsc::unbounded_channel()
}
