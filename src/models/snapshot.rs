use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for a connected-user count the server has not reported yet.
pub const UNKNOWN_USER_COUNT: i64 = -1;

/// Smallest screen resolution among connected users.
///
/// Whiteboard servers send `{"w": .., "h": ..}`; the long keys are accepted too.
/// Both dimensions must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Resolution as it arrives on the wire, before the dimensions are checked.
#[derive(Deserialize)]
struct RawResolution {
    #[serde(alias = "w")]
    width: u32,
    #[serde(alias = "h")]
    height: u32,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = String;

    fn try_from(raw: RawResolution) -> Result<Self, Self::Error> {
        if raw.width == 0 || raw.height == 0 {
            return Err(format!(
                "resolution must be positive, got ({}, {})",
                raw.width, raw.height
            ));
        }
        Ok(Resolution::new(raw.width, raw.height))
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Read-only view of the tracker's counters, handed to the presentation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoSnapshot {
    pub messages_received_count: u64,
    pub messages_sent_count: u64,
    pub connected_user_count: i64,
    pub smallest_screen_resolution: Option<Resolution>,
}

impl InfoSnapshot {
    /// Label for the resolution field, `Unknown` until the server reports one.
    pub fn resolution_label(&self) -> String {
        match self.smallest_screen_resolution {
            Some(resolution) => resolution.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// One-line summary in the order the info panel shows the fields.
impl fmt::Display for InfoSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received={} sent={} users={} resolution={}",
            self.messages_received_count,
            self.messages_sent_count,
            self.connected_user_count,
            self.resolution_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(resolution: Option<Resolution>) -> InfoSnapshot {
        InfoSnapshot {
            messages_received_count: 4,
            messages_sent_count: 7,
            connected_user_count: UNKNOWN_USER_COUNT,
            smallest_screen_resolution: resolution,
        }
    }

    #[test]
    fn test_resolution_accepts_short_keys() {
        let res: Resolution = serde_json::from_str(r#"{"w": 800, "h": 600}"#).unwrap();
        assert_eq!(res, Resolution::new(800, 600));
    }

    #[test]
    fn test_resolution_rejects_zero_dimensions() {
        assert!(serde_json::from_str::<Resolution>(r#"{"w": 0, "h": 0}"#).is_err());
        assert!(serde_json::from_str::<Resolution>(r#"{"width": 800, "height": 0}"#).is_err());
    }

    #[test]
    fn test_resolution_label() {
        assert_eq!(snapshot(None).resolution_label(), "Unknown");
        assert_eq!(
            snapshot(Some(Resolution::new(1280, 720))).resolution_label(),
            "(1280, 720)"
        );
    }

    #[test]
    fn test_snapshot_display() {
        assert_eq!(
            snapshot(None).to_string(),
            "received=4 sent=7 users=-1 resolution=Unknown"
        );
        assert_eq!(
            snapshot(Some(Resolution::new(800, 600))).to_string(),
            "received=4 sent=7 users=-1 resolution=(800, 600)"
        );
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let value = serde_json::to_value(snapshot(Some(Resolution::new(800, 600)))).unwrap();
        assert_eq!(value["messagesSentCount"], 7);
        assert_eq!(value["connectedUserCount"], -1);
        assert_eq!(value["smallestScreenResolution"]["width"], 800);
    }
}
