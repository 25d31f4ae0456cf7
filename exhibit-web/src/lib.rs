pub mod api;
pub mod config;
pub mod pages;
pub mod state;

use config::ExhibitConfig;
use dioxus::prelude::*;
use pages::{ArtistPage, ExhibitLayout, Visitor};

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ArtistPage {})]
    #[layout(ExhibitLayout)]
    #[route("/artist")]
    ArtistPage {},
    #[end_layout]
    #[route("/visitor")]
    Visitor {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(ExhibitConfig::from_build_env);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
