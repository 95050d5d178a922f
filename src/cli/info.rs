use colored::Colorize;

use crate::{cli::connect, error, utils};

/// Prints the metadata of a single track and the identifier the player gets.
pub fn info(track_url: String) {
    let mut client = connect();

    let track_info = match client.get_track_info(&track_url) {
        Ok(track_info) => track_info,
        Err(e) => error!("Failed to get track info: {}", e),
    };

    let artists = if track_info.artists.is_empty() {
        "-".to_string()
    } else {
        track_info.artists.join(", ")
    };
    let year = if track_info.year.is_empty() {
        "-"
    } else {
        track_info.year.as_str()
    };

    println!("{} {}", "Name:".bold(), track_info.name);
    println!("{} {}", "Artists:".bold(), artists);
    println!("{} {}", "Year:".bold(), year);
    println!("{} {}", "URI:".bold(), utils::to_playable_uri(&track_url));
}
