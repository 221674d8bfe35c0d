//! Periodic refresh timer for the info panel.
//!
//! The timer never touches tracker state. It only posts
//! [`TrackerEvent::RefreshTick`] into the tracker's event queue, tagged with
//! its generation so ticks from a cancelled timer can be recognised and
//! dropped.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::TrackerEvent;

/// A refresh timer. Dropping it aborts the task.
///
/// Without a tokio runtime there is nothing to tick on; the timer is then
/// inert and never posts.
#[derive(Debug)]
pub struct RefreshTimer {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    /// Spawn a timer on `runtime` that ticks every `period`, first tick one
    /// period from now.
    ///
    /// The task stops on its own once every strong sender of the event
    /// queue is gone. A zero `period` yields an inert timer.
    pub fn spawn(
        runtime: Option<&Handle>,
        period: Duration,
        generation: u64,
        events: WeakUnboundedSender<TrackerEvent>,
    ) -> Self {
        let Some(runtime) = runtime else {
            tracing::warn!(
                "No tokio runtime, info refresh timer {} will not tick",
                generation
            );
            return Self {
                generation,
                handle: None,
            };
        };
        if period.is_zero() {
            tracing::warn!(
                "Zero refresh interval, info refresh timer {} will not tick",
                generation
            );
            return Self {
                generation,
                handle: None,
            };
        }

        let handle = runtime.spawn(async move {
            tracing::info!(
                "Info refresh timer {} started (interval: {}ms)",
                generation,
                period.as_millis()
            );

            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let Some(tx) = events.upgrade() else {
                    tracing::debug!("Event queue closed, stopping refresh timer {}", generation);
                    break;
                };
                if tx.send(TrackerEvent::RefreshTick { generation }).is_err() {
                    tracing::debug!("Event queue closed, stopping refresh timer {}", generation);
                    break;
                }
                tracing::trace!("Refresh timer {} ticked", generation);
            }
        });

        Self {
            generation,
            handle: Some(handle),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this timer has a live task behind it.
    #[cfg(test)]
    fn is_ticking(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        tracing::info!("Info refresh timer {} stopped", self.generation);
    }
}
