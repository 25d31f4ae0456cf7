use std::time::Duration;

use crate::api;
use crate::config::ExhibitConfig;
use crate::state::{layout_for, ExhibitContext};
use crate::Route;
use dioxus::prelude::*;
use exhibit_common::{LayoutMode, Scheduler, TimerEvent};
use exhibit_ui::artworks::find_artwork;
use exhibit_ui::hooks::use_viewport;
use exhibit_ui::timers::TaskScheduler;
use exhibit_ui::{NavItem, PlayBarView, ShellLayoutView, StandaloneLayoutView};

/// Owns the exhibition state for every page under it and picks the frame
/// (desktop shell or full-screen) from the viewport.
#[component]
pub fn ExhibitLayout() -> Element {
    let config: ExhibitConfig = use_context();
    let viewport = use_viewport();
    let ctx = use_context_provider(move || ExhibitContext::new(viewport));
    let dispatch = use_callback(move |event: TimerEvent| ctx.on_timer(event));
    let timers = use_context_provider(move || TaskScheduler::new(dispatch));

    let artists_url = config.artists_url();
    let artists = use_resource(move || api::load_artists(artists_url.clone()));

    use_effect(move || {
        if let Some(list) = &*artists.read() {
            ctx.load(list.clone());
        }
    });

    // Orientation is compared after the resize settles, never inline
    use_effect(move || {
        let is_portrait = viewport.read().is_portrait;
        let mut timers = timers;
        timers.schedule(Duration::ZERO, TimerEvent::OrientationCheck { is_portrait });
    });

    use_effect(move || {
        let layout = layout_for(&viewport.read());
        ctx.set_layout(layout);
    });

    if layout_for(&viewport.read()) == LayoutMode::Standalone {
        return rsx! {
            StandaloneLayoutView { Outlet::<Route> {} }
        };
    }

    let nav_items = vec![
        NavItem {
            id: "artist".to_string(),
            label: "전시 감상".to_string(),
            is_active: true,
        },
        NavItem {
            id: "visitor".to_string(),
            label: "방명록".to_string(),
            is_active: false,
        },
    ];

    rsx! {
        ShellLayoutView {
            title: config.page_title.clone(),
            nav_items,
            on_nav_click: move |id: String| {
                if id == "visitor" {
                    navigator().push(Route::Visitor {});
                }
            },
            play_bar: rsx! {
                PlayBar {}
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn PlayBar() -> Element {
    let ctx: ExhibitContext = use_context();
    let index = ctx.index().unwrap_or(0);

    rsx! {
        PlayBarView {
            index,
            total: ctx.total(),
            artwork: find_artwork(index).cloned(),
            on_previous: move |_| {
                ctx.go_previous();
            },
            on_next: move |_| {
                ctx.go_next();
            },
            on_open_list: move |_| ctx.open_list(),
        }
    }
}
