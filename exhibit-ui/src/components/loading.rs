//! Loading indicator

use dioxus::prelude::*;

/// Spinner shown while the artist list is unavailable
#[component]
pub fn LoadingView(
    /// Message next to the spinner
    #[props(default = "불러오는 중...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading__spinner" }
            p { class: "loading__message", "{message}" }
        }
    }
}
