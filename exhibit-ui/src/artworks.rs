//! Artwork captions bundled with the app

use std::sync::OnceLock;

use tracing::warn;

use crate::display_types::Artwork;

const ARTWORKS_JSON: &str = include_str!("../assets/artworks.json");

/// All captions, parsed once. An unreadable catalogue yields no captions.
pub fn artwork_catalogue() -> &'static [Artwork] {
    static CATALOGUE: OnceLock<Vec<Artwork>> = OnceLock::new();
    CATALOGUE.get_or_init(|| {
        serde_json::from_str(ARTWORKS_JSON).unwrap_or_else(|e| {
            warn!("Failed to parse artwork catalogue: {e}");
            Vec::new()
        })
    })
}

/// Caption of the work by the artist at 1-based `index`.
pub fn find_artwork(index: u32) -> Option<&'static Artwork> {
    artwork_catalogue().iter().find(|a| a.artist_id == index)
}
