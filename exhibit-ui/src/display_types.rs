//! Display types for the exhibition views
//!
//! `Artist` mirrors the records served by the exhibition API; the views only
//! ever address them by position in the fetched sequence.

use serde::Deserialize;

/// One exhibit entry
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u32,
    pub artist_name: String,
    #[serde(default)]
    pub portrait_file_name: Option<String>,
    #[serde(default)]
    pub landscape_file_name: Option<String>,
}

impl Artist {
    /// Rendered image to show for the current orientation.
    ///
    /// Falls back to the other orientation when only one rendering exists.
    pub fn image_url(&self, bucket_url: &str, is_portrait: bool) -> Option<String> {
        let (preferred, fallback) = if is_portrait {
            (&self.portrait_file_name, &self.landscape_file_name)
        } else {
            (&self.landscape_file_name, &self.portrait_file_name)
        };

        preferred
            .as_ref()
            .or(fallback.as_ref())
            .map(|file| format!("{}/rendered/{}", bucket_url.trim_end_matches('/'), file))
    }
}

/// Caption data for the work on display
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub artist_id: u32,
    pub artist: String,
    pub title: String,
}
