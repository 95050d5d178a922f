//! # Spotify Integration Module
//!
//! This module is the catalog client of Sporlshuffle. It turns playlist and
//! track share links into Web API calls, manages the bearer token and decodes
//! responses into the types in [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (shuffle loop, tracks, info)
//!          ↓
//! SpotifyClient
//!     ├── Token lifecycle (client credentials, invalidate + retry once)
//!     ├── Playlist tracks (sequential offset pagination)
//!     └── Track metadata (name, artists, year)
//!          ↓
//! Transport (blocking reqwest, 45s timeout)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! Only the client-credentials flow is used, so no user login and no browser
//! are involved. The token is requested on first use and kept in memory for
//! the lifetime of the client. When an endpoint answers `401 Unauthorized`
//! the token is dropped, a new one is requested and the request is retried
//! exactly once. Nothing is persisted between runs.
//!
//! ## Error Handling
//!
//! All methods return [`crate::error::Result`]. No request is retried for any
//! other reason; rate limits and server errors surface as
//! [`crate::error::Error::Network`] and the caller decides what to do.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - Playlist items, 100 per page
//! - `GET /tracks/{id}` - Single track details

mod client;
mod playlist;
mod tracks;
pub mod transport;

pub use client::SpotifyClient;
pub use playlist::PAGE_SIZE;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
