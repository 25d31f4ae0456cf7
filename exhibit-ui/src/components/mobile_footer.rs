//! Caption strip at the bottom of the mobile page

use crate::display_types::Artwork;
use dioxus::prelude::*;

#[component]
pub fn MobileFooterView(
    artwork: Option<Artwork>,
    index: u32,
    total: u32,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        footer { class: "mobile-footer", onclick: move |_| on_click.call(()),
            span { class: "mobile-footer__status", "{index} / {total}" }
            if let Some(artwork) = artwork {
                div { class: "mobile-footer__caption",
                    p { class: "mobile-footer__artist", "{artwork.artist}" }
                    p { class: "mobile-footer__title", "{artwork.title}" }
                }
            }
        }
    }
}
