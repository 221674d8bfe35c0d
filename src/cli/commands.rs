//! Driver commands read from stdin.

use crate::error::{InfoError, InfoResult};
use crate::models::{Panel, ServerInfoUpdate};
use crate::tracker::TrackerEvent;

/// Parse one stdin line into a tracker event.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> InfoResult<Option<TrackerEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match (verb, rest) {
        ("show", panel) if !panel.is_empty() => TrackerEvent::Show(panel.parse::<Panel>()?),
        ("hide", panel) if !panel.is_empty() => TrackerEvent::Hide(panel.parse::<Panel>()?),
        ("toggle", panel) if !panel.is_empty() => TrackerEvent::Toggle(panel.parse::<Panel>()?),
        ("sent", "") => TrackerEvent::MessageSent,
        ("received", "") => TrackerEvent::MessageReceived,
        ("server", payload) if !payload.is_empty() => {
            TrackerEvent::ServerUpdate(ServerInfoUpdate::from_json(payload)?)
        }
        ("quit" | "exit", "") => TrackerEvent::Shutdown,
        _ => {
            return Err(InfoError::UnknownCommand {
                line: line.to_string(),
            })
        }
    };
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resolution;

    #[test]
    fn test_panel_commands() {
        assert_eq!(
            parse_command("show info").unwrap(),
            Some(TrackerEvent::Show(Panel::Info))
        );
        assert_eq!(
            parse_command("hide  lines ").unwrap(),
            Some(TrackerEvent::Hide(Panel::Lines))
        );
        assert_eq!(
            parse_command("toggle upload-options").unwrap(),
            Some(TrackerEvent::Toggle(Panel::UploadOptions))
        );
    }

    #[test]
    fn test_counter_commands() {
        assert_eq!(parse_command("sent").unwrap(), Some(TrackerEvent::MessageSent));
        assert_eq!(
            parse_command("received").unwrap(),
            Some(TrackerEvent::MessageReceived)
        );
    }

    #[test]
    fn test_server_command() {
        let event = parse_command(
            r#"server {"connectedUserCount": 3, "smallestScreenResolution": {"w": 800, "h": 600}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            Some(TrackerEvent::ServerUpdate(
                ServerInfoUpdate::new(3).with_resolution(Resolution::new(800, 600))
            ))
        );
    }

    #[test]
    fn test_quit_and_blank_lines() {
        assert_eq!(parse_command("quit").unwrap(), Some(TrackerEvent::Shutdown));
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("# comment").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_command("show toolbar"),
            Err(InfoError::UnknownPanel { .. })
        ));
        assert!(matches!(
            parse_command("show"),
            Err(InfoError::UnknownCommand { .. })
        ));
        assert!(matches!(
            parse_command("sent twice"),
            Err(InfoError::UnknownCommand { .. })
        ));
        assert!(matches!(
            parse_command("server {oops"),
            Err(InfoError::Json(_))
        ));
    }
}
