//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit the text color.

use dioxus::prelude::*;

#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// Chevron pointing left (previous work)
#[component]
pub fn ChevronLeftIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class, path { d: "m15 18-6-6 6-6" } }
    }
}

/// Chevron pointing right (next work)
#[component]
pub fn ChevronRightIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class, path { d: "m9 18 6-6-6-6" } }
    }
}

/// Three stacked lines (artist list)
#[component]
pub fn ListIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        }
    }
}

/// X icon (close)
#[component]
pub fn XIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
