//! Desktop shell layout
//!
//! Embedded-layout frame: a fixed-width navigation bar on the left, the
//! exhibition in the middle and the play bar along the bottom.

use dioxus::prelude::*;

/// Width (px) of the navigation bar
pub const NAVBAR_WIDTH: u32 = 225;
/// Height (px) of the play bar
pub const PLAYBAR_HEIGHT: u32 = 82;

/// Navigation entry in the shell's side bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Shell layout view (pure, props-based)
#[component]
pub fn ShellLayoutView(
    /// Exhibition content (typically the router outlet)
    children: Element,
    title: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Play bar along the bottom
    #[props(default)]
    play_bar: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "shell",
            style: "grid-template-columns: {NAVBAR_WIDTH}px 1fr; grid-template-rows: 1fr {PLAYBAR_HEIGHT}px;",
            nav { class: "shell__nav",
                h1 { class: "shell__title", "{title}" }
                for item in nav_items.iter() {
                    button {
                        key: "{item.id}",
                        class: if item.is_active { "shell__nav-item shell__nav-item--active" } else { "shell__nav-item" },
                        onclick: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                        "{item.label}"
                    }
                }
            }
            main { class: "shell__content", {children} }
            if let Some(pb) = play_bar {
                {pb}
            }
        }
    }
}

/// Full-screen layout for phones: content only, chrome is drawn by the page.
#[component]
pub fn StandaloneLayoutView(children: Element) -> Element {
    rsx! {
        div { class: "standalone", {children} }
    }
}
