use std::fmt;

use serde::Deserialize;

/// Client identifier and secret used for the client-credentials exchange.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// never print the secret
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Base URLs of the Web API and of the accounts token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: "https://api.spotify.com/v1".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
        }
    }
}

/// Display metadata of a single track. Missing fields are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub name: String,
    pub artists: Vec<String>,
    pub year: String,
}

impl fmt::Display for TrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.name, self.artists.join(", "))?;
        if !self.year.is_empty() {
            write!(f, " ({})", self.year)?;
        }
        Ok(())
    }
}

/// Body of the accounts token endpoint.
///
/// `access_token` is optional so that an error body such as
/// `{"error": "invalid_client"}` still decodes and can be reported.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// One page of `GET /playlists/{id}/tracks`.
///
/// A missing `total` counts as zero, a missing `items` as an empty page.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

/// Removed or local tracks come back with `track: null`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl PlaylistItem {
    /// Public web URL of the item's track, if the item carries one.
    pub fn track_url(&self) -> Option<&str> {
        self.track
            .as_ref()
            .and_then(|t| t.external_urls.spotify.as_deref())
    }
}

/// Body of `GET /tracks/{id}`, reduced to the fields we display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub release_date: Option<String>,
}

impl From<TrackResponse> for TrackInfo {
    fn from(track: TrackResponse) -> Self {
        let year = track
            .album
            .and_then(|a| a.release_date)
            .map(|date| date.chars().take(4).collect::<String>())
            .unwrap_or_default();

        TrackInfo {
            name: track.name,
            artists: track.artists.into_iter().filter_map(|a| a.name).collect(),
            year,
        }
    }
}
