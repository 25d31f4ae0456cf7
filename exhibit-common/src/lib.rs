//! exhibit-common - Browser-free core of the exhibition viewer
//!
//! Holds the navigation model (current artist index, its session mirror and
//! the carousel handle), the header auto-hide state machine, the viewport
//! classifier and the orientation-change reloader. Everything that touches
//! the browser is reached through the traits defined here, so the whole
//! model runs natively under `cargo test`.

pub mod chrome;
pub mod error;
pub mod index_store;
pub mod navigation;
pub mod orientation;
pub mod scheduler;
pub mod viewport;

pub use chrome::{ChromeState, ChromeVisibility, HEADER_IDLE};
pub use error::NavigationError;
pub use index_store::{IndexStore, MemoryStore, SessionStore, PERSISTED_INDEX_KEY};
pub use navigation::{
    Carousel, Exhibit, LayoutMode, NavOutcome, RESTART_RELOAD_DELAY, SLIDE_SETTLE,
};
pub use orientation::OrientationReloader;
pub use scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerId};
pub use viewport::{ViewportInfo, MOBILE_BREAKPOINT};
