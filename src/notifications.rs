//! Outbound notifications from the tracker to the presentation side.
//!
//! Each variant serializes with a `kind` tag so a JSON consumer can
//! dispatch on it:
//!
//! ```text
//! {"kind":"visibility-changed","panel":"size","visible":true}
//! {"kind":"user-count-changed","newCount":3}
//! {"kind":"snapshot-refresh","snapshot":{...}}
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{InfoSnapshot, Panel};

/// A state transition the presentation adapter should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InfoNotification {
    /// A panel was shown or hidden
    VisibilityChanged { panel: Panel, visible: bool },
    /// Connected-user count changed; user-count dependent settings should refresh
    #[serde(rename_all = "camelCase")]
    UserCountChanged { new_count: i64 },
    /// Periodic (or initial) refresh of the info panel contents
    SnapshotRefresh { snapshot: InfoSnapshot },
}

impl InfoNotification {
    /// The `kind` tag this notification serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            InfoNotification::VisibilityChanged { .. } => "visibility-changed",
            InfoNotification::UserCountChanged { .. } => "user-count-changed",
            InfoNotification::SnapshotRefresh { .. } => "snapshot-refresh",
        }
    }
}
