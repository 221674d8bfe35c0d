use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InfoError;

/// Number of panels the tracker manages.
pub const PANEL_COUNT: usize = 6;

/// A togglable whiteboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    /// Connection and message statistics; refreshed periodically while shown
    Info,
    Size,
    RectangleShapes,
    Lines,
    UploadOptions,
    SaveOptions,
}

impl Panel {
    /// Every panel, in display order.
    pub const ALL: [Panel; PANEL_COUNT] = [
        Panel::Info,
        Panel::Size,
        Panel::RectangleShapes,
        Panel::Lines,
        Panel::UploadOptions,
        Panel::SaveOptions,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Info => "info",
            Panel::Size => "size",
            Panel::RectangleShapes => "rectangle-shapes",
            Panel::Lines => "lines",
            Panel::UploadOptions => "upload-options",
            Panel::SaveOptions => "save-options",
        }
    }

    /// Position in [`Panel::ALL`], used to index flag storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Panel::Info => 0,
            Panel::Size => 1,
            Panel::RectangleShapes => 2,
            Panel::Lines => 3,
            Panel::UploadOptions => 4,
            Panel::SaveOptions => 5,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panel {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Panel::ALL
            .into_iter()
            .find(|panel| panel.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InfoError::UnknownPanel {
                name: name.to_string(),
            })
    }
}
