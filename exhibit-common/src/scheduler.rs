//! Deferred page work
//!
//! The model never sleeps. Anything that has to happen later (hiding the
//! header, applying a settled slide, checking orientation, reloading) is
//! handed to a [`Scheduler`] as a [`TimerEvent`]; the host fires the event
//! back into the model when the delay elapses.

use std::time::Duration;

/// Work scheduled on the page event loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Idle timeout of the header. Stale generations are ignored.
    HideChrome { generation: u64 },
    /// The carousel finished animating to `position` (zero-based).
    SlideSettled { position: usize },
    /// Deferred orientation comparison after a viewport change.
    OrientationCheck { is_portrait: bool },
    /// Full page reload.
    Reload,
}

/// Something that can run a [`TimerEvent`] after a delay.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle returned by [`ManualScheduler`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct PendingTimer {
    id: TimerId,
    due: Duration,
    event: TimerEvent,
}

/// Scheduler driven by a virtual clock.
///
/// Nothing fires on its own: [`ManualScheduler::advance`] moves the clock and
/// returns every event that became due, in due order. Used natively and in
/// tests where no event loop exists.
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers scheduled and not yet fired or cancelled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Events currently waiting, in scheduling order.
    pub fn pending_events(&self) -> Vec<TimerEvent> {
        self.pending.iter().map(|t| t.event).collect()
    }

    /// Advance the clock and drain the events that became due.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<PendingTimer> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }

        due.sort_by_key(|t| (t.due, t.id.0));
        due.into_iter().map(|t| t.event).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            due: self.now + delay,
            event,
        });
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.pending.retain(|t| t.id != handle);
    }
}
