//! Error types shared by the catalog client, the shuffle session and the CLI.

use thiserror::Error;

/// Everything that can go wrong while talking to Spotify or drawing tracks.
///
/// Every variant is recoverable from the caller's point of view: the core
/// never terminates the process, the CLI decides whether to skip or abort.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed reference or a reference that does not point at Spotify.
    #[error("invalid reference: {0}")]
    Validation(String),

    /// The client-credentials exchange failed or yielded no usable token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport failure, unexpected status or an undecodable response body.
    #[error("network error: {0}")]
    Network(String),

    /// Every track of the session has already been drawn.
    #[error("no tracks left to draw")]
    Empty,

    /// Missing or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The external player could not be launched.
    #[error("player error: {0}")]
    Player(String),
}

pub type Result<T> = std::result::Result<T, Error>;
