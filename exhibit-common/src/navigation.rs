//! Navigation over the artist sequence
//!
//! [`Exhibit`] is the page-scoped context: the index store, the carousel
//! handle and the swipe flag. Buttons, modals and the carousel itself all go
//! through it, and it is the only thing that moves the carousel
//! programmatically.
//!
//! Two directions of change exist and must not feed back into each other:
//! - programmatic moves (buttons, list, restart) update the index and then
//!   drive the carousel;
//! - gesture moves start in the carousel, which reports the target slide via
//!   [`Exhibit::before_change`]; the index follows once the slide settles.

use std::time::Duration;

use tracing::debug;

use crate::{IndexStore, NavigationError, Scheduler, SessionStore, TimerEvent};

/// Carousel transition time; the index follows a swipe after this delay.
pub const SLIDE_SETTLE: Duration = Duration::from_millis(300);

/// Delay between a restart and the page reload that resets the carousel.
pub const RESTART_RELOAD_DELAY: Duration = Duration::from_millis(10);

/// Imperative surface of the carousel widget. Positions are zero-based.
pub trait Carousel {
    fn go_to(&mut self, position: usize);

    fn next(&mut self);

    fn prev(&mut self);
}

/// Whether the exhibition runs inside the desktop shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full-screen mobile page with its own header and footer.
    #[default]
    Standalone,
    /// Inside the shell with navigation bar and play bar.
    Embedded,
}

/// Result of a navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Index changed (or was re-applied) to the given value.
    Moved(u32),
    /// Already at the first/last artist; nothing happened.
    AtBoundary,
    /// Index reset to 1; a reload follows when `reload_scheduled`.
    Restarted { reload_scheduled: bool },
    /// No artists are loaded.
    Unavailable,
}

pub struct Exhibit<S, C> {
    store: IndexStore<S>,
    slider: Option<C>,
    layout: LayoutMode,
    swiping: bool,
}

impl<S: SessionStore, C: Carousel> Exhibit<S, C> {
    pub fn new(store: IndexStore<S>, layout: LayoutMode) -> Self {
        Self {
            store,
            slider: None,
            layout,
            swiping: false,
        }
    }

    pub fn index(&self) -> Option<u32> {
        self.store.index()
    }

    pub fn total(&self) -> u32 {
        self.store.total()
    }

    pub fn store(&self) -> &IndexStore<S> {
        &self.store
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn is_embedded(&self) -> bool {
        self.layout == LayoutMode::Embedded
    }

    /// Whether a swipe is in flight (reported but not yet settled).
    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    /// Taps must not toggle the header mid-swipe or inside the shell.
    pub fn chrome_toggle_suppressed(&self) -> bool {
        self.swiping || self.is_embedded()
    }

    pub fn slider(&self) -> Option<&C> {
        self.slider.as_ref()
    }

    /// Attach the carousel and bring it to the current artist.
    pub fn attach_slider(&mut self, slider: C) {
        self.slider = Some(slider);
        if let Some(index) = self.index() {
            self.with_slider(|s| s.go_to(index as usize - 1));
        }
    }

    pub fn detach_slider(&mut self) -> Option<C> {
        self.slider.take()
    }

    pub fn go_previous(&mut self) -> NavOutcome {
        let Some(index) = self.index() else {
            return NavOutcome::Unavailable;
        };
        if index <= 1 {
            return NavOutcome::AtBoundary;
        }

        let target = index - 1;
        if let Err(e) = self.store.set_index(target) {
            debug!("Previous rejected: {e}");
            return NavOutcome::AtBoundary;
        }
        self.with_slider(|s| s.prev());
        debug!("Moved back to artist {target}");
        NavOutcome::Moved(target)
    }

    pub fn go_next(&mut self) -> NavOutcome {
        let Some(index) = self.index() else {
            return NavOutcome::Unavailable;
        };
        if index >= self.total() {
            return NavOutcome::AtBoundary;
        }

        let target = index + 1;
        if let Err(e) = self.store.set_index(target) {
            debug!("Next rejected: {e}");
            return NavOutcome::AtBoundary;
        }
        self.with_slider(|s| s.next());
        debug!("Moved forward to artist {target}");
        NavOutcome::Moved(target)
    }

    /// Jump straight to artist `n` (1-based), e.g. from the artist list.
    pub fn jump_to(&mut self, n: u32) -> Result<NavOutcome, NavigationError> {
        self.store.set_index(n)?;
        self.with_slider(|s| s.go_to(n as usize - 1));
        debug!("Jumped to artist {n}");
        Ok(NavOutcome::Moved(n))
    }

    /// Back to the first artist. Outside the shell the page also reloads,
    /// since the carousel does not reflect the jump cleanly otherwise.
    pub fn restart_from_first<T: Scheduler>(&mut self, timers: &mut T) -> NavOutcome {
        if self.store.set_index(1).is_err() {
            return NavOutcome::Unavailable;
        }
        self.with_slider(|s| s.go_to(0));

        let reload_scheduled = !self.is_embedded();
        if reload_scheduled {
            timers.schedule(RESTART_RELOAD_DELAY, TimerEvent::Reload);
        }
        debug!("Restarted from first artist (reload: {reload_scheduled})");
        NavOutcome::Restarted { reload_scheduled }
    }

    /// The carousel is moving to `position`; apply it once the slide settles.
    pub fn before_change<T: Scheduler>(&mut self, position: usize, timers: &mut T) {
        timers.schedule(SLIDE_SETTLE, TimerEvent::SlideSettled { position });
    }

    /// The carousel detected a swipe gesture.
    pub fn on_swipe(&mut self) {
        self.swiping = true;
    }

    /// The carousel settled on `position` after its transition.
    pub fn on_slide_settled(&mut self, position: usize) -> NavOutcome {
        self.swiping = false;

        let Some(n) = position
            .checked_add(1)
            .and_then(|n| u32::try_from(n).ok())
        else {
            return NavOutcome::AtBoundary;
        };
        match self.store.set_index(n) {
            Ok(()) => NavOutcome::Moved(n),
            Err(NavigationError::Uninitialized) => NavOutcome::Unavailable,
            Err(e) => {
                debug!("Ignoring settled slide: {e}");
                NavOutcome::AtBoundary
            }
        }
    }

    fn with_slider(&mut self, f: impl FnOnce(&mut C)) {
        match self.slider.as_mut() {
            Some(slider) => f(slider),
            None => debug!("Carousel not attached yet, skipping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualScheduler, MemoryStore};

    #[derive(Debug, Default, PartialEq)]
    struct RecordingCarousel {
        calls: Vec<String>,
    }

    impl Carousel for RecordingCarousel {
        fn go_to(&mut self, position: usize) {
            self.calls.push(format!("go_to({position})"));
        }

        fn next(&mut self) {
            self.calls.push("next".into());
        }

        fn prev(&mut self) {
            self.calls.push("prev".into());
        }
    }

    fn exhibit(start: &str, total: u32) -> Exhibit<MemoryStore, RecordingCarousel> {
        let store = IndexStore::restore(MemoryStore::with_index(start), total);
        let mut exhibit = Exhibit::new(store, LayoutMode::Standalone);
        exhibit.attach_slider(RecordingCarousel::default());
        exhibit
    }

    fn calls(exhibit: &Exhibit<MemoryStore, RecordingCarousel>) -> Vec<String> {
        exhibit.slider().map(|s| s.calls.clone()).unwrap_or_default()
    }

    #[test]
    fn test_attach_moves_slider_to_current() {
        let exhibit = exhibit("3", 5);
        assert_eq!(calls(&exhibit), vec!["go_to(2)"]);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut exhibit = exhibit("1", 5);
        assert_eq!(exhibit.go_previous(), NavOutcome::AtBoundary);
        assert_eq!(exhibit.go_previous(), NavOutcome::AtBoundary);
        assert_eq!(exhibit.index(), Some(1));
        assert_eq!(calls(&exhibit), vec!["go_to(0)"]);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let mut exhibit = exhibit("5", 5);
        assert_eq!(exhibit.go_next(), NavOutcome::AtBoundary);
        assert_eq!(exhibit.index(), Some(5));
        assert_eq!(exhibit.store().persisted().as_deref(), Some("5"));
    }

    #[test]
    fn test_next_and_previous_drive_slider() {
        let mut exhibit = exhibit("2", 5);
        assert_eq!(exhibit.go_next(), NavOutcome::Moved(3));
        assert_eq!(exhibit.go_previous(), NavOutcome::Moved(2));
        assert_eq!(calls(&exhibit), vec!["go_to(1)", "next", "prev"]);
        assert!(!exhibit.is_swiping());
    }

    #[test]
    fn test_navigation_without_slider_still_updates_index() {
        let store = IndexStore::restore(MemoryStore::new(), 3);
        let mut exhibit: Exhibit<_, RecordingCarousel> = Exhibit::new(store, LayoutMode::Standalone);
        assert_eq!(exhibit.go_next(), NavOutcome::Moved(2));
        assert_eq!(exhibit.store().persisted().as_deref(), Some("2"));
    }

    #[test]
    fn test_navigation_without_artists() {
        let store = IndexStore::restore(MemoryStore::new(), 0);
        let mut exhibit: Exhibit<_, RecordingCarousel> = Exhibit::new(store, LayoutMode::Standalone);
        assert_eq!(exhibit.go_next(), NavOutcome::Unavailable);
        assert_eq!(exhibit.go_previous(), NavOutcome::Unavailable);
        let mut timers = ManualScheduler::new();
        assert_eq!(
            exhibit.restart_from_first(&mut timers),
            NavOutcome::Unavailable
        );
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn test_jump_to_validates_bounds() {
        let mut exhibit = exhibit("1", 5);
        assert_eq!(exhibit.jump_to(4), Ok(NavOutcome::Moved(4)));
        assert_eq!(
            exhibit.jump_to(6),
            Err(NavigationError::OutOfRange { index: 6, total: 5 })
        );
        assert_eq!(exhibit.index(), Some(4));
        assert_eq!(calls(&exhibit), vec!["go_to(0)", "go_to(3)"]);
    }

    #[test]
    fn test_restart_standalone_schedules_reload() {
        let mut exhibit = exhibit("4", 5);
        let mut timers = ManualScheduler::new();
        assert_eq!(
            exhibit.restart_from_first(&mut timers),
            NavOutcome::Restarted {
                reload_scheduled: true
            }
        );
        assert_eq!(exhibit.index(), Some(1));
        assert_eq!(exhibit.store().persisted().as_deref(), Some("1"));
        assert_eq!(calls(&exhibit).last().map(String::as_str), Some("go_to(0)"));
        assert_eq!(
            timers.advance(RESTART_RELOAD_DELAY),
            vec![TimerEvent::Reload]
        );
    }

    #[test]
    fn test_restart_embedded_does_not_reload() {
        let mut exhibit = exhibit("4", 5);
        exhibit.set_layout(LayoutMode::Embedded);
        let mut timers = ManualScheduler::new();
        assert_eq!(
            exhibit.restart_from_first(&mut timers),
            NavOutcome::Restarted {
                reload_scheduled: false
            }
        );
        assert_eq!(exhibit.index(), Some(1));
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn test_swipe_settles_after_delay() {
        let mut exhibit = exhibit("2", 5);
        let mut timers = ManualScheduler::new();

        exhibit.on_swipe();
        exhibit.before_change(2, &mut timers);
        assert!(exhibit.chrome_toggle_suppressed());
        assert!(timers.advance(Duration::from_millis(299)).is_empty());
        assert_eq!(exhibit.index(), Some(2));

        for event in timers.advance(Duration::from_millis(1)) {
            if let TimerEvent::SlideSettled { position } = event {
                assert_eq!(exhibit.on_slide_settled(position), NavOutcome::Moved(3));
            }
        }
        assert_eq!(exhibit.index(), Some(3));
        assert_eq!(exhibit.store().persisted().as_deref(), Some("3"));
        assert!(!exhibit.is_swiping());
        // The carousel moved itself; no programmatic call after attach.
        assert_eq!(calls(&exhibit), vec!["go_to(1)"]);
    }

    #[test]
    fn test_settled_position_out_of_range_is_ignored() {
        let mut exhibit = exhibit("2", 3);
        assert_eq!(exhibit.on_slide_settled(7), NavOutcome::AtBoundary);
        assert_eq!(exhibit.index(), Some(2));
    }

    #[test]
    fn test_settled_position_at_usize_max_is_ignored() {
        let mut exhibit = exhibit("2", 3);
        exhibit.on_swipe();
        assert_eq!(exhibit.on_slide_settled(usize::MAX), NavOutcome::AtBoundary);
        assert_eq!(exhibit.index(), Some(2));
        assert!(!exhibit.is_swiping());
    }

    #[test]
    fn test_embedded_suppresses_chrome_toggle() {
        let mut exhibit = exhibit("1", 3);
        assert!(!exhibit.chrome_toggle_suppressed());
        exhibit.set_layout(LayoutMode::Embedded);
        assert!(exhibit.chrome_toggle_suppressed());
    }
}
