use exhibit_ui::display_types::Artist;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Artist list fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `GET /artist` response envelope
#[derive(Deserialize)]
struct ArtistsEnvelope {
    #[serde(default)]
    artists: Vec<Artist>,
}

pub fn parse_artists(body: &str) -> Result<Vec<Artist>, FetchError> {
    let envelope: ArtistsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.artists)
}

/// Fetch the ordered artist list from the exhibition API
pub async fn fetch_artists(url: &str) -> Result<Vec<Artist>, FetchError> {
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status()));
    }

    let body = resp.text().await?;
    parse_artists(&body)
}

/// Fetch the artist list, degrading to an empty exhibition on failure.
pub async fn load_artists(url: String) -> Vec<Artist> {
    match fetch_artists(&url).await {
        Ok(artists) => {
            info!("Loaded {} artists", artists.len());
            artists
        }
        Err(e) => {
            warn!("Failed to load artists from {url}: {e}");
            Vec::new()
        }
    }
}
