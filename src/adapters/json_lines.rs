//! JSON-lines presentation adapter.
//!
//! Writes every notification as a single JSON object followed by a
//! newline. Used by the headless binary to stream notifications on stdout.

use std::io::Write;
use std::sync::Mutex;

use crate::notifications::InfoNotification;
use crate::traits::PresentationAdapter;

/// Serializes notifications to a writer, one per line.
#[derive(Debug)]
pub struct JsonLinesAdapter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesAdapter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, notification: &InfoNotification) -> std::io::Result<()> {
        let line = serde_json::to_string(notification)?;
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl<W: Write + Send> PresentationAdapter for JsonLinesAdapter<W> {
    fn notify(&self, notification: InfoNotification) {
        if let Err(e) = self.write_line(&notification) {
            tracing::warn!("Failed to write {} notification: {}", notification.kind(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Panel;

    #[test]
    fn test_writes_one_line_per_notification() {
        let adapter = JsonLinesAdapter::new(Vec::new());
        adapter.notify(InfoNotification::VisibilityChanged {
            panel: Panel::Size,
            visible: true,
        });
        adapter.notify(InfoNotification::UserCountChanged { new_count: 5 });

        let output = String::from_utf8(adapter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"kind":"visibility-changed","panel":"size","visible":true}"#
        );
        assert_eq!(lines[1], r#"{"kind":"user-count-changed","newCount":5}"#);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let adapter = JsonLinesAdapter::new(FailingWriter);
        adapter.notify(InfoNotification::UserCountChanged { new_count: 1 });
    }
}
