//! Spotify Playlist Shuffle CLI Library
//!
//! This library fetches the tracks of a Spotify playlist and plays them back
//! in a random order without ever repeating a track within a session.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all modules
//! - `player` - Hand-off of tracks to the local Spotify app
//! - `session` - Draw-without-replacement shuffle session
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and response schemas
//! - `utils` - Share link helpers
//!
//! # Example
//!
//! ```
//! use sporlshuffle::{session::ShuffleSession, spotify::SpotifyClient, types::Credentials};
//!
//! fn main() -> sporlshuffle::error::Result<()> {
//!     let mut client = SpotifyClient::new(Credentials::new("id", "secret"))?;
//!     let tracks = client.get_playlist_tracks("https://open.spotify.com/playlist/abc")?;
//!     let mut session = ShuffleSession::new(tracks);
//!     let track = session.draw_next()?;
//!     println!("{}", track);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("This playlist has {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this macro. Library code returns errors instead
/// so that callers can decide whether a failure is fatal.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a track whose metadata could not be
/// fetched, after which the session simply continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
