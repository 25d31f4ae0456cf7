//! Full-bleed rendering of one artist's work

use crate::display_types::Artist;
use dioxus::prelude::*;

/// Rendered artwork image (pure, props-based)
#[component]
pub fn RenderedImageView(
    artist: Artist,
    bucket_url: String,
    is_portrait: bool,
    /// Tap on the artwork
    on_click: EventHandler<()>,
) -> Element {
    let src = artist.image_url(&bucket_url, is_portrait);
    let alt = artist.artist_name.clone();

    rsx! {
        div { class: "rendered-image", onclick: move |_| on_click.call(()),
            if let Some(src) = src {
                img {
                    class: "rendered-image__img",
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    draggable: false,
                }
            } else {
                div { class: "rendered-image__missing", "{alt}" }
            }
        }
    }
}
