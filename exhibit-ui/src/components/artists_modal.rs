//! Artist list modal
//!
//! Slides up over the carousel and lists every artist in exhibition order.
//! Selecting an entry jumps straight to that artist.

use crate::components::icons::XIcon;
use crate::display_types::Artist;
use dioxus::prelude::*;

#[component]
pub fn ArtistsModalView(
    artists: Vec<Artist>,
    /// 1-based index of the artist on screen
    current: Option<u32>,
    /// Called with the 1-based index of the chosen artist
    on_select: EventHandler<u32>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "list-modal", "data-testid": "artists-modal",
            div { class: "list-modal__header",
                span { "작가 목록" }
                button {
                    class: "icon-button",
                    aria_label: "닫기",
                    onclick: move |_| on_close.call(()),
                    XIcon {}
                }
            }
            ol { class: "list-modal__entries",
                for (i, artist) in artists.iter().enumerate() {
                    ArtistEntry {
                        key: "{artist.id}",
                        position: i as u32 + 1,
                        name: artist.artist_name.clone(),
                        is_current: current == Some(i as u32 + 1),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn ArtistEntry(
    position: u32,
    name: String,
    is_current: bool,
    on_select: EventHandler<u32>,
) -> Element {
    rsx! {
        li {
            class: if is_current { "list-modal__entry list-modal__entry--current" } else { "list-modal__entry" },
            onclick: move |_| on_select.call(position),
            span { class: "list-modal__number", "{position}" }
            span { "{name}" }
        }
    }
}
