//! Presentation adapter trait abstraction.
//!
//! The tracker never renders anything itself. It hands every state
//! transition to a [`PresentationAdapter`], which owns element lookup,
//! styling and visibility rendering.

use crate::notifications::InfoNotification;

/// Receiver of tracker notifications.
///
/// Implementations include the channel adapter used by the event loop,
/// the JSON-lines writer used by the binary, and a recording mock for tests.
///
/// # Example
///
/// ```ignore
/// use whiteboard_info::traits::PresentationAdapter;
/// use whiteboard_info::notifications::InfoNotification;
///
/// struct StderrAdapter;
///
/// impl PresentationAdapter for StderrAdapter {
///     fn notify(&self, notification: InfoNotification) {
///         eprintln!("{:?}", notification);
///     }
/// }
/// ```
pub trait PresentationAdapter: Send + Sync {
    /// Deliver one notification. Must not block.
    fn notify(&self, notification: InfoNotification);
}

impl<A: PresentationAdapter + ?Sized> PresentationAdapter for std::sync::Arc<A> {
    fn notify(&self, notification: InfoNotification) {
        (**self).notify(notification)
    }
}

impl<A: PresentationAdapter + ?Sized> PresentationAdapter for Box<A> {
    fn notify(&self, notification: InfoNotification) {
        (**self).notify(notification)
    }
}
