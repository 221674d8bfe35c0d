//! Display-state tracking for the whiteboard info panels.
//!
//! [`DisplayStateTracker`] owns the panel visibility flags, the message and
//! user counters, and the cached smallest screen resolution. Every state
//! transition is reported to a [`PresentationAdapter`].
//!
//! While the info panel is visible a [`RefreshTimer`] posts ticks into the
//! tracker's event queue; servicing a tick emits a snapshot refresh. The
//! timer exists if and only if the info panel is visible.

mod event_loop;
mod refresh_timer;

pub use event_loop::{event_channel, run_event_loop, TrackerEvent};
pub use refresh_timer::RefreshTimer;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};

use crate::config::InfoConfig;
use crate::error::InfoResult;
use crate::models::{
    InfoSnapshot, Panel, Resolution, PANEL_COUNT, ServerInfoUpdate, UNKNOWN_USER_COUNT,
};
use crate::notifications::InfoNotification;
use crate::traits::PresentationAdapter;

/// Tracks whiteboard display state and notifies the presentation side.
pub struct DisplayStateTracker<A: PresentationAdapter> {
    adapter: A,
    config: InfoConfig,
    /// Indexed by [`Panel::index`]
    visibility: [bool; PANEL_COUNT],
    connected_user_count: i64,
    smallest_screen_resolution: Option<Resolution>,
    messages_sent: u64,
    messages_received: u64,
    refresh_timer: Option<RefreshTimer>,
    /// Generation handed to the next timer
    next_timer_generation: u64,
    events: WeakUnboundedSender<TrackerEvent>,
    /// Runtime the refresh timer is spawned on
    runtime: Option<Handle>,
}

impl<A: PresentationAdapter> DisplayStateTracker<A> {
    /// Create a tracker with every panel hidden and all counters at their
    /// initial values.
    ///
    /// `events` is the queue refresh ticks are posted to; only a weak
    /// reference is kept so the queue closes once its other senders drop.
    /// The current tokio runtime, if any, is captured for the refresh timer.
    pub fn new(
        adapter: A,
        config: InfoConfig,
        events: &UnboundedSender<TrackerEvent>,
    ) -> InfoResult<Self> {
        config.validate()?;
        Ok(Self {
            adapter,
            config,
            visibility: [false; PANEL_COUNT],
            connected_user_count: UNKNOWN_USER_COUNT,
            smallest_screen_resolution: None,
            messages_sent: 0,
            messages_received: 0,
            refresh_timer: None,
            next_timer_generation: 0,
            events: events.downgrade(),
            runtime: Handle::try_current().ok(),
        })
    }

    // ========================================================================
    // Server updates and counters
    // ========================================================================

    /// Apply an info update from the server.
    ///
    /// A changed user count is announced before it is stored. An absent
    /// resolution leaves the cached one in place.
    pub fn update_from_server(&mut self, update: ServerInfoUpdate) {
        if self.connected_user_count != update.connected_user_count {
            tracing::debug!(
                "Connected users changed: {} -> {}",
                self.connected_user_count,
                update.connected_user_count
            );
            self.adapter.notify(InfoNotification::UserCountChanged {
                new_count: update.connected_user_count,
            });
        }
        self.connected_user_count = update.connected_user_count;

        if let Some(resolution) = update.smallest_screen_resolution {
            self.smallest_screen_resolution = Some(resolution);
        }
    }

    pub fn increment_messages_sent(&mut self) {
        self.messages_sent = self.messages_sent.wrapping_add(1);
    }

    pub fn increment_messages_received(&mut self) {
        self.messages_received = self.messages_received.wrapping_add(1);
    }

    // ========================================================================
    // Panel visibility
    // ========================================================================

    /// Show a panel. No-op if it is already visible.
    pub fn show(&mut self, panel: Panel) {
        if self.is_visible(panel) {
            if panel == Panel::Info && self.refresh_timer.is_none() {
                self.start_refresh_timer();
            }
            return;
        }
        self.visibility[panel.index()] = true;
        tracing::debug!("Panel {} shown", panel);
        self.adapter.notify(InfoNotification::VisibilityChanged {
            panel,
            visible: true,
        });

        if panel == Panel::Info {
            self.refresh_displayed_info();
            self.start_refresh_timer();
        }
    }

    /// Hide a panel. No-op if it is already hidden.
    pub fn hide(&mut self, panel: Panel) {
        if !self.is_visible(panel) {
            return;
        }
        if panel == Panel::Info {
            self.stop_refresh_timer();
        }

        self.visibility[panel.index()] = false;
        tracing::debug!("Panel {} hidden", panel);
        self.adapter.notify(InfoNotification::VisibilityChanged {
            panel,
            visible: false,
        });
    }

    /// Flip a panel between shown and hidden.
    pub fn toggle(&mut self, panel: Panel) {
        if self.is_visible(panel) {
            self.hide(panel);
        } else {
            self.show(panel);
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visibility[panel.index()]
    }

    /// Panels currently visible, in [`Panel::ALL`] order.
    pub fn visible_panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|panel| self.is_visible(*panel))
            .collect()
    }

    // ========================================================================
    // Snapshots and refresh
    // ========================================================================

    /// Current counters, for rendering. Never mutates.
    pub fn refresh_snapshot(&self) -> InfoSnapshot {
        InfoSnapshot {
            messages_received_count: self.messages_received,
            messages_sent_count: self.messages_sent,
            connected_user_count: self.connected_user_count,
            smallest_screen_resolution: self.smallest_screen_resolution,
        }
    }

    /// Service a tick from the refresh timer.
    ///
    /// Ticks from a timer that has since been stopped are dropped.
    pub fn handle_refresh_tick(&mut self, generation: u64) {
        match &self.refresh_timer {
            Some(timer) if timer.generation() == generation => self.refresh_displayed_info(),
            _ => tracing::trace!("Ignoring stale refresh tick {}", generation),
        }
    }

    fn refresh_displayed_info(&self) {
        let snapshot = self.refresh_snapshot();
        tracing::trace!("Refreshing info panel: {}", snapshot);
        self.adapter
            .notify(InfoNotification::SnapshotRefresh { snapshot });
    }

    fn start_refresh_timer(&mut self) {
        if self.refresh_timer.is_some() {
            return;
        }
        if self.runtime.is_none() {
            self.runtime = Handle::try_current().ok();
        }
        let generation = self.next_timer_generation;
        self.next_timer_generation += 1;
        self.refresh_timer = Some(RefreshTimer::spawn(
            self.runtime.as_ref(),
            self.config.refresh_interval,
            generation,
            self.events.clone(),
        ));
    }

    fn stop_refresh_timer(&mut self) {
        // Dropping the timer aborts its task
        self.refresh_timer = None;
    }

    /// Stop background work. The info panel is hidden along with its timer.
    pub fn shutdown(&mut self) {
        self.hide(Panel::Info);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Connected users, or [`UNKNOWN_USER_COUNT`] before the first server update.
    pub fn connected_user_count(&self) -> i64 {
        self.connected_user_count
    }

    pub fn smallest_screen_resolution(&self) -> Option<Resolution> {
        self.smallest_screen_resolution
    }

    pub fn messages_sent(&self) -> u64 {
        self.messages_sent
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received
    }

    pub fn refresh_timer_active(&self) -> bool {
        self.refresh_timer.is_some()
    }

    /// Generation of the live refresh timer, if any.
    pub fn refresh_timer_generation(&self) -> Option<u64> {
        self.refresh_timer.as_ref().map(RefreshTimer::generation)
    }

    /// Total number of refresh timers ever started.
    pub fn refresh_timers_started(&self) -> u64 {
        self.next_timer_generation
    }
}
