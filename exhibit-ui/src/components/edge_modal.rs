//! End-of-exhibition modal
//!
//! Shown when the visitor asks for the next work on the last one. Offers to
//! leave the exhibition or start again from the first work.

use dioxus::prelude::*;

#[component]
pub fn EdgeModalView(
    /// Larger layout inside the desktop shell
    embedded: bool,
    /// Blurred background image, usually the current work
    #[props(default)]
    background_url: Option<String>,
    on_exit: EventHandler<()>,
    on_restart: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: if embedded { "edge-modal edge-modal--embedded" } else { "edge-modal" },
            "data-testid": "edge-modal",
            if let Some(url) = background_url {
                img { class: "edge-modal__background", src: "{url}", alt: "" }
            }
            div { class: "edge-modal__blur", onclick: move |_| on_close.call(()) }
            div { class: "edge-modal__box",
                div { class: "edge-modal__top" }
                div { class: "edge-modal__bottom",
                    p { class: "edge-modal__situation", "마지막 작품까지 보셨어요" }
                    p { class: "edge-modal__question", "전시를 다시 감상하실래요?" }
                    div { class: "grow" }
                    button {
                        class: "edge-modal__exit",
                        onclick: move |_| on_exit.call(()),
                        "전시장 나가기"
                    }
                    button {
                        class: "edge-modal__restart",
                        onclick: move |_| on_restart.call(()),
                        "1번 작품부터 다시보기"
                    }
                }
            }
        }
    }
}
