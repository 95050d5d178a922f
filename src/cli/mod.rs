//! # CLI Module
//!
//! The user-facing commands of Sporlshuffle. Each command builds a
//! [`SpotifyClient`] from the configuration and presents results with the
//! crate's output macros.
//!
//! - [`shuffle`] - Interactive shuffle session over a playlist
//! - [`tracks`] - Lists every track link of a playlist
//! - [`info`] - Shows metadata and the player identifier of one track
//!
//! Failures inside the interactive loop are reported as warnings and the
//! session continues; failures before a session starts end the program.

mod info;
mod shuffle;
mod tracks;

pub use info::info;
pub use shuffle::shuffle;
pub use tracks::tracks;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config, error, spotify::SpotifyClient};

fn connect() -> SpotifyClient {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!(
            "{}\nSet {} and {} in your environment or in {}",
            e,
            config::CLIENT_ID_VAR,
            config::CLIENT_SECRET_VAR,
            config::env_path().display()
        ),
    };

    match SpotifyClient::with_endpoints(credentials, config::endpoints()) {
        Ok(client) => client,
        Err(e) => error!("Failed to create Spotify client: {}", e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Fetches a playlist's track links behind a spinner, exiting on failure.
fn fetch_playlist(client: &mut SpotifyClient, playlist_url: &str) -> Vec<String> {
    let pb = spinner("Fetching playlist tracks...");
    let result = client.get_playlist_tracks(playlist_url);
    pb.finish_and_clear();

    match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Error getting playlist tracks: {}", e),
    }
}

/// Prints `prompt` and reads one trimmed line from stdin.
///
/// Returns `None` on end of input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn is_exit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "exit" | "quit" | "q")
}
