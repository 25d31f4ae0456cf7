//! Header auto-hide
//!
//! The header starts visible and hides itself after [`HEADER_IDLE`]. A tap
//! toggles it unless the tap is the tail of a swipe or the page runs inside
//! the embedded layout. Every entry into `Visible` replaces the pending hide
//! timer, so at most one is outstanding.

use std::time::Duration;

use tracing::debug;

use crate::{Scheduler, TimerEvent};

/// Idle time before the header hides itself
pub const HEADER_IDLE: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChromeState {
    #[default]
    Visible,
    Hidden,
}

/// Visibility of the header overlay, generic over the scheduler's handle.
pub struct ChromeVisibility<H> {
    state: ChromeState,
    generation: u64,
    pending: Option<H>,
    idle: Duration,
}

impl<H> Default for ChromeVisibility<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ChromeVisibility<H> {
    pub fn new() -> Self {
        Self::with_idle(HEADER_IDLE)
    }

    pub fn with_idle(idle: Duration) -> Self {
        Self {
            state: ChromeState::Visible,
            generation: 0,
            pending: None,
            idle,
        }
    }

    pub fn state(&self) -> ChromeState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ChromeState::Visible
    }

    /// Whether a hide timer is outstanding.
    pub fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the idle timer for the initial `Visible` state.
    pub fn mount<S: Scheduler<Handle = H>>(&mut self, timers: &mut S) {
        self.show(timers);
    }

    /// Enter `Visible` and restart the idle timer.
    pub fn show<S: Scheduler<Handle = H>>(&mut self, timers: &mut S) {
        self.state = ChromeState::Visible;
        self.rearm(timers);
    }

    /// Tap on the artwork or footer. Returns whether the state changed.
    pub fn toggle<S: Scheduler<Handle = H>>(&mut self, suppressed: bool, timers: &mut S) -> bool {
        if suppressed {
            debug!("Header toggle suppressed");
            return false;
        }

        match self.state {
            ChromeState::Hidden => self.show(timers),
            ChromeState::Visible => {
                self.cancel_pending(timers);
                self.state = ChromeState::Hidden;
            }
        }
        true
    }

    /// Idle timer fired. Returns whether the header was hidden by it.
    pub fn on_hide_timer(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            debug!("Ignoring stale header timer {generation}");
            return false;
        }

        self.pending = None;
        if self.state == ChromeState::Hidden {
            return false;
        }
        self.state = ChromeState::Hidden;
        true
    }

    fn rearm<S: Scheduler<Handle = H>>(&mut self, timers: &mut S) {
        self.cancel_pending(timers);
        self.generation += 1;
        let handle = timers.schedule(
            self.idle,
            TimerEvent::HideChrome {
                generation: self.generation,
            },
        );
        self.pending = Some(handle);
    }

    fn cancel_pending<S: Scheduler<Handle = H>>(&mut self, timers: &mut S) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }
}
