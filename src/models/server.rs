use serde::{Deserialize, Serialize};

use super::Resolution;
use crate::error::InfoResult;

/// Info update pushed by the whiteboard server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoUpdate {
    #[serde(alias = "nbConnectedUsers")]
    pub connected_user_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smallest_screen_resolution: Option<Resolution>,
}

impl ServerInfoUpdate {
    /// Update carrying only a user count.
    pub fn new(connected_user_count: i64) -> Self {
        Self {
            connected_user_count,
            smallest_screen_resolution: None,
        }
    }

    /// Attach a resolution.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.smallest_screen_resolution = Some(resolution);
        self
    }

    /// Decode a server payload.
    pub fn from_json(payload: &str) -> InfoResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
