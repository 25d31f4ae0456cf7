//! Exhibition page state shared through context
//!
//! [`ExhibitContext`] is a bundle of signals provided by the layout and read
//! by the pages. The navigation rules live in `exhibit-common`; this module
//! only routes browser events into them and timer events back out.

use dioxus::prelude::*;
use exhibit_common::{
    Carousel, ChromeVisibility, Exhibit, IndexStore, LayoutMode, NavOutcome, NavigationError,
    OrientationReloader, Scheduler, SessionStore, TimerEvent, ViewportInfo,
};
use exhibit_ui::browser::{reload_page, BrowserSessionStore};
use exhibit_ui::display_types::Artist;
use exhibit_ui::timers::TaskScheduler;
use exhibit_ui::SliderController;
use tracing::{debug, info};

pub type PageExhibit = Exhibit<BrowserSessionStore, SliderController>;

/// Wide viewports render inside the shell, phones stand alone.
pub fn layout_for(viewport: &ViewportInfo) -> LayoutMode {
    if viewport.is_mobile {
        LayoutMode::Standalone
    } else {
        LayoutMode::Embedded
    }
}

/// Overlays drawn above the carousel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    pub artist_list: bool,
    /// End-of-exhibition modal
    pub edge: bool,
}

/// Next artist. On the last one this raises the end-of-exhibition modal.
pub fn advance<S: SessionStore, C: Carousel>(
    exhibit: &mut Exhibit<S, C>,
    overlays: &mut Overlays,
) -> NavOutcome {
    let outcome = exhibit.go_next();
    if outcome == NavOutcome::AtBoundary && exhibit.index() == Some(exhibit.total()) {
        overlays.edge = true;
    }
    outcome
}

/// Jump to the artist picked from the list, closing the list either way.
pub fn select_artist<S: SessionStore, C: Carousel>(
    exhibit: &mut Exhibit<S, C>,
    overlays: &mut Overlays,
    n: u32,
) -> Result<NavOutcome, NavigationError> {
    overlays.artist_list = false;
    exhibit.jump_to(n)
}

/// "Restart" on the end-of-exhibition modal.
pub fn restart_from_edge<S: SessionStore, C: Carousel, T: Scheduler>(
    exhibit: &mut Exhibit<S, C>,
    overlays: &mut Overlays,
    timers: &mut T,
) -> NavOutcome {
    overlays.edge = false;
    exhibit.restart_from_first(timers)
}

/// Taps are ignored until the exhibit exists.
pub fn chrome_toggle_suppressed<S: SessionStore, C: Carousel>(
    exhibit: Option<&Exhibit<S, C>>,
) -> bool {
    exhibit.is_none_or(|e| e.chrome_toggle_suppressed())
}

#[derive(Clone, Copy)]
pub struct ExhibitContext {
    pub artists: Signal<Vec<Artist>>,
    /// `None` until the artist list has loaded
    pub exhibit: Signal<Option<PageExhibit>>,
    pub chrome: Signal<ChromeVisibility<Task>>,
    pub orientation: Signal<OrientationReloader>,
    pub viewport: Signal<ViewportInfo>,
    pub overlays: Signal<Overlays>,
}

impl ExhibitContext {
    pub fn new(viewport: Signal<ViewportInfo>) -> Self {
        Self {
            artists: Signal::new(Vec::new()),
            exhibit: Signal::new(None),
            chrome: Signal::new(ChromeVisibility::new()),
            orientation: Signal::new(OrientationReloader::new()),
            viewport,
            overlays: Signal::new(Overlays::default()),
        }
    }

    /// Install the artist list and restore the persisted index. Runs once.
    pub fn load(mut self, artists: Vec<Artist>) {
        if self.exhibit.peek().is_some() {
            return;
        }
        let total = artists.len() as u32;
        let layout = layout_for(&self.viewport.peek());
        let store = IndexStore::restore(BrowserSessionStore, total);
        info!("Exhibition ready: {total} artists, starting at {:?}", store.index());

        self.artists.set(artists);
        self.exhibit.set(Some(Exhibit::new(store, layout)));
    }

    pub fn is_loaded(&self) -> bool {
        self.exhibit.read().is_some()
    }

    pub fn index(&self) -> Option<u32> {
        self.exhibit.read().as_ref().and_then(|e| e.index())
    }

    pub fn total(&self) -> u32 {
        self.exhibit.read().as_ref().map_or(0, |e| e.total())
    }

    pub fn current_artist(&self) -> Option<Artist> {
        let index = self.index()?;
        self.artists.read().get(index as usize - 1).cloned()
    }

    pub fn set_layout(mut self, layout: LayoutMode) {
        self.with_exhibit(|e| e.set_layout(layout));
    }

    pub fn attach_slider(mut self, slider: SliderController) {
        self.with_exhibit(|e| e.attach_slider(slider));
    }

    pub fn detach_slider(mut self) {
        if let Ok(mut exhibit) = self.exhibit.try_write() {
            if let Some(e) = exhibit.as_mut() {
                e.detach_slider();
            }
        }
    }

    pub fn go_previous(mut self) -> NavOutcome {
        self.with_exhibit(|e| e.go_previous())
            .unwrap_or(NavOutcome::Unavailable)
    }

    /// Next button and forward swipe on the last slide both land here.
    pub fn go_next(mut self) -> NavOutcome {
        self.with_overlays(advance)
            .unwrap_or(NavOutcome::Unavailable)
    }

    pub fn jump_to(mut self, n: u32) {
        if let Some(Err(e)) = self.with_overlays(|e, overlays| select_artist(e, overlays, n)) {
            debug!("Ignoring jump: {e}");
        }
        self.close_list();
    }

    pub fn restart(mut self, mut timers: TaskScheduler) {
        self.with_overlays(|e, overlays| restart_from_edge(e, overlays, &mut timers));
        self.close_edge();
    }

    pub fn on_swipe(mut self) {
        self.with_exhibit(|e| e.on_swipe());
    }

    pub fn before_change(mut self, position: usize, mut timers: TaskScheduler) {
        self.with_exhibit(|e| e.before_change(position, &mut timers));
    }

    pub fn show_chrome(mut self, mut timers: TaskScheduler) {
        self.chrome.write().mount(&mut timers);
    }

    pub fn toggle_chrome(mut self, mut timers: TaskScheduler) {
        let suppressed = chrome_toggle_suppressed(self.exhibit.peek().as_ref());
        self.chrome.write().toggle(suppressed, &mut timers);
    }

    pub fn open_list(mut self) {
        self.overlays.write().artist_list = true;
    }

    pub fn close_list(mut self) {
        if self.overlays.peek().artist_list {
            self.overlays.write().artist_list = false;
        }
    }

    pub fn close_edge(mut self) {
        if self.overlays.peek().edge {
            self.overlays.write().edge = false;
        }
    }

    /// Entry point for every timer scheduled through [`TaskScheduler`].
    pub fn on_timer(mut self, event: TimerEvent) {
        match event {
            TimerEvent::HideChrome { generation } => {
                self.chrome.write().on_hide_timer(generation);
            }
            TimerEvent::SlideSettled { position } => {
                self.with_exhibit(|e| e.on_slide_settled(position));
            }
            TimerEvent::OrientationCheck { is_portrait } => {
                if self.orientation.write().observe(is_portrait) {
                    reload_page();
                }
            }
            TimerEvent::Reload => reload_page(),
        }
    }

    fn with_exhibit<R>(&mut self, f: impl FnOnce(&mut PageExhibit) -> R) -> Option<R> {
        self.exhibit.write().as_mut().map(f)
    }

    /// Like `with_exhibit`, publishing overlay changes only when there are any.
    fn with_overlays<R>(
        &mut self,
        f: impl FnOnce(&mut PageExhibit, &mut Overlays) -> R,
    ) -> Option<R> {
        let before = *self.overlays.peek();
        let mut overlays = before;
        let result = self.with_exhibit(|e| f(e, &mut overlays));
        if overlays != before {
            self.overlays.set(overlays);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_common::{ManualScheduler, MemoryStore, RESTART_RELOAD_DELAY};

    #[derive(Default)]
    struct CountingSlider {
        position: usize,
    }

    impl Carousel for CountingSlider {
        fn go_to(&mut self, position: usize) {
            self.position = position;
        }

        fn next(&mut self) {
            self.position += 1;
        }

        fn prev(&mut self) {
            self.position = self.position.saturating_sub(1);
        }
    }

    fn exhibit(start: &str, total: u32, layout: LayoutMode) -> Exhibit<MemoryStore, CountingSlider> {
        let store = IndexStore::restore(MemoryStore::with_index(start), total);
        let mut exhibit = Exhibit::new(store, layout);
        exhibit.attach_slider(CountingSlider::default());
        exhibit
    }

    #[test]
    fn test_next_on_last_artist_opens_edge_modal() {
        let mut exhibit = exhibit("4", 5, LayoutMode::Embedded);
        let mut overlays = Overlays::default();

        assert_eq!(advance(&mut exhibit, &mut overlays), NavOutcome::Moved(5));
        assert!(!overlays.edge);

        assert_eq!(advance(&mut exhibit, &mut overlays), NavOutcome::AtBoundary);
        assert!(overlays.edge);
        assert_eq!(exhibit.index(), Some(5));
    }

    #[test]
    fn test_previous_boundary_never_opens_edge_modal() {
        let mut exhibit = exhibit("1", 5, LayoutMode::Standalone);
        let mut overlays = Overlays::default();
        assert_eq!(exhibit.go_previous(), NavOutcome::AtBoundary);
        assert_eq!(advance(&mut exhibit, &mut overlays), NavOutcome::Moved(2));
        assert_eq!(overlays, Overlays::default());
    }

    #[test]
    fn test_next_without_artists_keeps_overlays_closed() {
        let mut exhibit = exhibit("1", 0, LayoutMode::Standalone);
        let mut overlays = Overlays::default();
        assert_eq!(advance(&mut exhibit, &mut overlays), NavOutcome::Unavailable);
        assert!(!overlays.edge);
    }

    #[test]
    fn test_restart_from_edge_modal_reloads_standalone() {
        let mut exhibit = exhibit("5", 5, LayoutMode::Standalone);
        let mut overlays = Overlays::default();
        let mut timers = ManualScheduler::new();

        advance(&mut exhibit, &mut overlays);
        assert!(overlays.edge);

        assert_eq!(
            restart_from_edge(&mut exhibit, &mut overlays, &mut timers),
            NavOutcome::Restarted {
                reload_scheduled: true
            }
        );
        assert!(!overlays.edge);
        assert_eq!(exhibit.index(), Some(1));
        assert_eq!(exhibit.store().persisted().as_deref(), Some("1"));
        assert_eq!(exhibit.slider().map(|s| s.position), Some(0));
        assert_eq!(
            timers.advance(RESTART_RELOAD_DELAY),
            vec![TimerEvent::Reload]
        );
    }

    #[test]
    fn test_restart_from_edge_modal_embedded_does_not_reload() {
        let mut exhibit = exhibit("5", 5, LayoutMode::Embedded);
        let mut overlays = Overlays::default();
        let mut timers = ManualScheduler::new();

        advance(&mut exhibit, &mut overlays);
        restart_from_edge(&mut exhibit, &mut overlays, &mut timers);

        assert!(!overlays.edge);
        assert_eq!(exhibit.index(), Some(1));
        assert_eq!(timers.pending_len(), 0);
        assert!(timers.advance(RESTART_RELOAD_DELAY).is_empty());
    }

    #[test]
    fn test_selecting_artist_closes_list() {
        let mut exhibit = exhibit("1", 5, LayoutMode::Standalone);
        let mut overlays = Overlays {
            artist_list: true,
            edge: false,
        };

        assert_eq!(
            select_artist(&mut exhibit, &mut overlays, 3),
            Ok(NavOutcome::Moved(3))
        );
        assert!(!overlays.artist_list);
        assert_eq!(exhibit.slider().map(|s| s.position), Some(2));
    }

    #[test]
    fn test_out_of_range_selection_still_closes_list() {
        let mut exhibit = exhibit("2", 5, LayoutMode::Standalone);
        let mut overlays = Overlays {
            artist_list: true,
            edge: false,
        };

        assert!(select_artist(&mut exhibit, &mut overlays, 9).is_err());
        assert!(!overlays.artist_list);
        assert_eq!(exhibit.index(), Some(2));
    }

    #[test]
    fn test_chrome_toggle_suppressed_until_loaded_and_in_shell() {
        assert!(chrome_toggle_suppressed::<MemoryStore, CountingSlider>(None));

        let standalone = exhibit("1", 3, LayoutMode::Standalone);
        assert!(!chrome_toggle_suppressed(Some(&standalone)));

        let embedded = exhibit("1", 3, LayoutMode::Embedded);
        assert!(chrome_toggle_suppressed(Some(&embedded)));
    }

    #[test]
    fn test_layout_follows_viewport() {
        assert_eq!(
            layout_for(&ViewportInfo::classify(390, 844)),
            LayoutMode::Standalone
        );
        assert_eq!(
            layout_for(&ViewportInfo::classify(1440, 900)),
            LayoutMode::Embedded
        );
    }
}
