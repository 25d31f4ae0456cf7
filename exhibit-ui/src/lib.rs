//! exhibit-ui - Views and browser adapters for the exhibition viewer
//!
//! Contains the display types, the pure props-based views (header, footer,
//! play bar, carousel, modals) and the glue that plugs the browser into
//! `exhibit-common`: session storage, the resize listener, task timers and
//! page reload.

pub mod artworks;
pub mod browser;
pub mod components;
pub mod display_types;
pub mod hooks;
pub mod timers;

pub use components::*;
pub use display_types::*;
