mod panel;
mod server;
mod snapshot;

pub use panel::{Panel, PANEL_COUNT};
pub use server::ServerInfoUpdate;
pub use snapshot::{InfoSnapshot, Resolution, UNKNOWN_USER_COUNT};
