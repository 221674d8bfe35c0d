//! Single event queue servicing the tracker.
//!
//! Every mutation and every refresh tick is delivered as a [`TrackerEvent`]
//! and handled one at a time by [`run_event_loop`], so tracker state is only
//! ever touched from one task.

use tokio::sync::mpsc;

use super::DisplayStateTracker;
use crate::models::{Panel, ServerInfoUpdate};
use crate::traits::PresentationAdapter;

/// Inbound message for the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Connected-user count / resolution pushed by the server
    ServerUpdate(ServerInfoUpdate),
    /// A drawing message was sent to the server
    MessageSent,
    /// A drawing message was received from the server
    MessageReceived,
    Show(Panel),
    Hide(Panel),
    Toggle(Panel),
    /// Posted by the refresh timer
    RefreshTick { generation: u64 },
    /// Stop the loop
    Shutdown,
}

/// Create the event queue a tracker is driven by.
pub fn event_channel() -> (
    mpsc::UnboundedSender<TrackerEvent>,
    mpsc::UnboundedReceiver<TrackerEvent>,
) {
    mpsc::unbounded_channel()
}

impl<A: PresentationAdapter> DisplayStateTracker<A> {
    /// Apply one event. Returns `false` once the loop should stop.
    pub fn handle_event(&mut self, event: TrackerEvent) -> bool {
        match event {
            TrackerEvent::ServerUpdate(update) => self.update_from_server(update),
            TrackerEvent::MessageSent => self.increment_messages_sent(),
            TrackerEvent::MessageReceived => self.increment_messages_received(),
            TrackerEvent::Show(panel) => self.show(panel),
            TrackerEvent::Hide(panel) => self.hide(panel),
            TrackerEvent::Toggle(panel) => self.toggle(panel),
            TrackerEvent::RefreshTick { generation } => self.handle_refresh_tick(generation),
            TrackerEvent::Shutdown => return false,
        }
        true
    }
}

/// Drive `tracker` from `events` until [`TrackerEvent::Shutdown`] arrives or
/// every sender is dropped.
///
/// On exit the info panel is hidden, which stops its refresh timer, and the
/// tracker is handed back so callers can inspect its final state.
pub async fn run_event_loop<A: PresentationAdapter>(
    mut tracker: DisplayStateTracker<A>,
    mut events: mpsc::UnboundedReceiver<TrackerEvent>,
) -> DisplayStateTracker<A> {
    tracing::info!("Display state event loop started");

    while let Some(event) = events.recv().await {
        if !tracker.handle_event(event) {
            tracing::debug!("Shutdown requested");
            break;
        }
    }

    tracker.shutdown();
    tracing::info!("Display state event loop stopped");
    tracker
}
