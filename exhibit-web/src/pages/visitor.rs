use crate::api;
use crate::config::ExhibitConfig;
use crate::Route;
use dioxus::prelude::*;
use exhibit_ui::LoadingView;

/// Where visitors land after leaving the exhibition.
#[component]
pub fn Visitor() -> Element {
    let config: ExhibitConfig = use_context();
    let artists_url = config.artists_url();
    let artists = use_resource(move || api::load_artists(artists_url.clone()));

    let names: Option<Vec<String>> = artists
        .cloned()
        .map(|list| list.into_iter().map(|a| a.artist_name).collect());

    rsx! {
        document::Title { "{config.page_title} - 방명록" }
        div { class: "visitor",
            h1 { class: "visitor__heading", "관람해 주셔서 감사합니다" }
            match names {
                None => rsx! {
                    LoadingView {}
                },
                Some(names) if names.is_empty() => rsx! {
                    p { class: "visitor__empty", "참여 작가 정보를 불러오지 못했습니다" }
                },
                Some(names) => rsx! {
                    p { class: "visitor__subheading", "참여 작가" }
                    ul { class: "visitor__artists",
                        for (i, name) in names.into_iter().enumerate() {
                            li { key: "{i}", "{name}" }
                        }
                    }
                },
            }
            button {
                class: "visitor__enter",
                onclick: move |_| {
                    navigator().push(Route::ArtistPage {});
                },
                "전시 다시 보기"
            }
        }
    }
}
