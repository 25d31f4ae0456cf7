//! Header overlay shown above the artwork

use crate::components::icons::ListIcon;
use dioxus::prelude::*;

/// Header overlay (pure, props-based)
///
/// Stays mounted while hidden so the fade transition can run.
#[component]
pub fn HeaderView(
    visible: bool,
    title: String,
    /// Opens the artist list; omitted inside the desktop shell
    #[props(into)]
    on_open_list: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        header {
            class: if visible { "exhibit-header" } else { "exhibit-header exhibit-header--hidden" },
            "data-testid": "exhibit-header",
            span { class: "exhibit-header__title", "{title}" }
            if let Some(on_open_list) = on_open_list {
                button {
                    class: "icon-button",
                    aria_label: "작가 목록",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_open_list.call(());
                    },
                    ListIcon {}
                }
            }
        }
    }
}
