use color_eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use whiteboard_info::adapters::JsonLinesAdapter;
use whiteboard_info::cli::{parse_args, parse_command, version_string, CliCommand, USAGE};
use whiteboard_info::config::InfoConfig;
use whiteboard_info::tracker::{event_channel, run_event_loop, DisplayStateTracker, TrackerEvent};

/// Log to stderr so stdout stays a clean notification stream.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run { config_path } => config_path,
    };

    color_eyre::install()?;
    init_tracing();

    let config = match config_path {
        Some(path) => InfoConfig::from_json_file(&path)?,
        None => InfoConfig::from_env()?,
    };
    tracing::info!(
        "Starting with refresh interval {}ms",
        config.refresh_interval.as_millis()
    );

    // The single tracker instance; it lives until the event loop returns
    let (events_tx, events_rx) = event_channel();
    let tracker = DisplayStateTracker::new(
        JsonLinesAdapter::new(std::io::stdout()),
        config,
        &events_tx,
    )?;
    let event_loop = tokio::spawn(run_event_loop(tracker, events_rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Some(event)) => {
                let shutdown = event == TrackerEvent::Shutdown;
                if events_tx.send(event).is_err() || shutdown {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) if e.is_input_error() => tracing::warn!("Skipping input line: {}", e),
            Err(e) => tracing::error!("Failed to handle input line: {}", e),
        }
    }

    drop(events_tx);
    let tracker = event_loop.await?;
    tracing::info!(
        "Exiting after {} sent / {} received messages",
        tracker.messages_sent(),
        tracker.messages_received()
    );
    Ok(())
}
