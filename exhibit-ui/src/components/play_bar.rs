//! Play bar view component
//!
//! Bottom bar of the desktop shell: progress through the exhibition,
//! previous/next controls, caption of the current work and the list button.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ListIcon};
use crate::display_types::Artwork;
use dioxus::prelude::*;

/// Share of the exhibition seen so far, in percent.
pub fn progress_percent(index: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * index.min(total) as f64 / total as f64
}

/// Previous is live past the first artist.
pub fn previous_enabled(index: u32) -> bool {
    index > 1
}

/// Next stays live on the last artist, where it leads to the end of the
/// exhibition instead of another slide.
pub fn next_enabled(index: u32, total: u32) -> bool {
    index >= 1 && total > 0
}

/// Play bar view (pure, props-based)
/// All callbacks are required - pass noops if not needed.
#[component]
pub fn PlayBarView(
    index: u32,
    total: u32,
    artwork: Option<Artwork>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_open_list: EventHandler<()>,
) -> Element {
    let progress = progress_percent(index, total);
    let can_go_back = previous_enabled(index);
    let can_go_on = next_enabled(index, total);

    rsx! {
        div { class: "play-bar",
            div { class: "play-bar__progress", style: "width: {progress}%;" }
            span { class: "play-bar__status", "{index} / {total}" }
            div { class: "play-bar__buttons",
                button {
                    class: "icon-button",
                    disabled: !can_go_back,
                    aria_label: "이전 작품",
                    onclick: move |_| on_previous.call(()),
                    ChevronLeftIcon {}
                }
                button {
                    class: "icon-button",
                    disabled: !can_go_on,
                    aria_label: "다음 작품",
                    onclick: move |_| on_next.call(()),
                    ChevronRightIcon {}
                }
            }
            if let Some(artwork) = artwork {
                div { class: "play-bar__info",
                    span { class: "play-bar__artist", "{artwork.artist}" }
                    span { class: "play-bar__title", "{artwork.title}" }
                }
            }
            button {
                class: "icon-button play-bar__list",
                aria_label: "작가 목록",
                onclick: move |_| on_open_list.call(()),
                ListIcon {}
            }
        }
    }
}
