//! Shared UI components

pub mod artists_modal;
pub mod edge_modal;
pub mod header;
pub mod icons;
pub mod loading;
pub mod mobile_footer;
pub mod play_bar;
pub mod rendered_image;
pub mod shell;
pub mod slider;

pub use artists_modal::ArtistsModalView;
pub use edge_modal::EdgeModalView;
pub use header::HeaderView;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, ListIcon, XIcon};
pub use loading::LoadingView;
pub use mobile_footer::MobileFooterView;
pub use play_bar::{next_enabled, previous_enabled, progress_percent, PlayBarView};
pub use rendered_image::RenderedImageView;
pub use shell::{NavItem, ShellLayoutView, StandaloneLayoutView, NAVBAR_WIDTH, PLAYBAR_HEIGHT};
pub use slider::{
    classify_swipe, swipe_target, use_slider, SliderController, SliderView, Swipe, SWIPE_THRESHOLD_PX,
};
