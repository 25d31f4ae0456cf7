//! Build-time configuration
//!
//! Endpoints are baked in at compile time from `EXHIBIT_API_URL` and
//! `EXHIBIT_BUCKET_URL`; the wasm bundle has no other environment to read.
//! Layout and timing constants are re-exported here so the app has one place
//! to look them up.

pub use exhibit_common::{HEADER_IDLE, MOBILE_BREAKPOINT, RESTART_RELOAD_DELAY, SLIDE_SETTLE};
pub use exhibit_ui::{NAVBAR_WIDTH, PLAYBAR_HEIGHT};

pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_BUCKET_URL: &str = "/bucket";
pub const PAGE_TITLE: &str = "온라인 전시";

#[derive(Clone, Debug, PartialEq)]
pub struct ExhibitConfig {
    /// Base URL of the exhibition API (no trailing slash)
    pub api_url: String,
    /// Base URL of the image bucket (no trailing slash)
    pub bucket_url: String,
    pub page_title: String,
}

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ExhibitConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("EXHIBIT_API_URL"), option_env!("EXHIBIT_BUCKET_URL"))
    }

    fn from_values(api_url: Option<&str>, bucket_url: Option<&str>) -> Self {
        Self {
            api_url: normalize(api_url, DEFAULT_API_URL),
            bucket_url: normalize(bucket_url, DEFAULT_BUCKET_URL),
            page_title: PAGE_TITLE.to_string(),
        }
    }

    pub fn artists_url(&self) -> String {
        format!("{}/artist", self.api_url)
    }

    /// Browser title for the artist on screen.
    pub fn title_for(&self, artist_name: Option<&str>) -> String {
        match artist_name {
            Some(name) => format!("{} - {}", self.page_title, name),
            None => self.page_title.clone(),
        }
    }
}

fn normalize(value: Option<&str>, default: &str) -> String {
    match value.map(|v| v.trim().trim_end_matches('/')) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExhibitConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.bucket_url, DEFAULT_BUCKET_URL);
        assert_eq!(config.artists_url(), "/api/artist");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ExhibitConfig::from_values(Some("https://api.example.org/"), Some(" "));
        assert_eq!(config.artists_url(), "https://api.example.org/artist");
        assert_eq!(config.bucket_url, DEFAULT_BUCKET_URL);
    }

    #[test]
    fn test_title_for() {
        let config = ExhibitConfig::default();
        assert_eq!(config.title_for(Some("Kim")), "온라인 전시 - Kim");
        assert_eq!(config.title_for(None), "온라인 전시");
    }
}
