use crate::config::ExhibitConfig;
use crate::state::{layout_for, ExhibitContext};
use crate::Route;
use dioxus::prelude::*;
use exhibit_common::LayoutMode;
use exhibit_ui::artworks::find_artwork;
use exhibit_ui::timers::TaskScheduler;
use exhibit_ui::{
    use_slider, ArtistsModalView, EdgeModalView, HeaderView, LoadingView, MobileFooterView,
    RenderedImageView, SliderView,
};

/// The exhibition itself: one slide per artist.
#[component]
pub fn ArtistPage() -> Element {
    let ctx: ExhibitContext = use_context();
    let config: ExhibitConfig = use_context();

    if !ctx.is_loaded() {
        return rsx! {
            document::Title { "{config.page_title}" }
            LoadingView {}
        };
    }
    if ctx.total() == 0 {
        return rsx! {
            document::Title { "{config.page_title}" }
            p { class: "exhibit-empty", "전시 중인 작품이 없습니다" }
        };
    }

    rsx! {
        ExhibitCarousel {}
        ExhibitModals {}
    }
}

/// Mounted once the artist list is known, so the slider is sized to it.
#[component]
fn ExhibitCarousel() -> Element {
    let ctx: ExhibitContext = use_context();
    let timers: TaskScheduler = use_context();
    let config: ExhibitConfig = use_context();

    let artists = ctx.artists.cloned();
    let slider = use_slider(artists.len());

    use_effect(move || {
        ctx.attach_slider(slider);
        ctx.show_chrome(timers);
    });
    use_drop(move || ctx.detach_slider());

    let viewport = *ctx.viewport.read();
    let standalone = layout_for(&viewport) == LayoutMode::Standalone;
    let gestures = viewport.gestures_enabled();
    let index = ctx.index();
    let total = ctx.total();
    let chrome_visible = ctx.chrome.read().is_visible();
    let current_name = ctx.current_artist().map(|a| a.artist_name);
    let title = config.title_for(current_name.as_deref());

    rsx! {
        document::Title { "{title}" }
        if standalone {
            HeaderView {
                visible: chrome_visible,
                title: config.page_title.clone(),
                on_open_list: move |_| ctx.open_list(),
            }
        }
        SliderView {
            controller: slider,
            swipe_enabled: gestures,
            animate: gestures,
            on_swipe: move |_| ctx.on_swipe(),
            on_before_change: move |position: usize| ctx.before_change(position, timers),
            on_past_last: move |_| {
                ctx.go_next();
            },
            for artist in artists.iter() {
                div { key: "{artist.id}", class: "slide",
                    RenderedImageView {
                        artist: artist.clone(),
                        bucket_url: config.bucket_url.clone(),
                        is_portrait: viewport.is_portrait,
                        on_click: move |_| ctx.toggle_chrome(timers),
                    }
                }
            }
        }
        if standalone {
            MobileFooterView {
                artwork: index.and_then(find_artwork).cloned(),
                index: index.unwrap_or(0),
                total,
                on_click: move |_| ctx.toggle_chrome(timers),
            }
        }
    }
}

#[component]
fn ExhibitModals() -> Element {
    let ctx: ExhibitContext = use_context();
    let timers: TaskScheduler = use_context();
    let config: ExhibitConfig = use_context();

    let overlays = *ctx.overlays.read();
    let embedded = layout_for(&ctx.viewport.read()) == LayoutMode::Embedded;
    let background_url = ctx
        .current_artist()
        .and_then(|a| a.image_url(&config.bucket_url, ctx.viewport.read().is_portrait));

    rsx! {
        if overlays.artist_list {
            ArtistsModalView {
                artists: ctx.artists.cloned(),
                current: ctx.index(),
                on_select: move |n: u32| ctx.jump_to(n),
                on_close: move |_| ctx.close_list(),
            }
        }
        if overlays.edge {
            EdgeModalView {
                embedded,
                background_url,
                on_exit: move |_| {
                    ctx.close_edge();
                    navigator().push(Route::Visitor {});
                },
                on_restart: move |_| ctx.restart(timers),
                on_close: move |_| ctx.close_edge(),
            }
        }
    }
}
