use crate::{
    cli::{connect, fetch_playlist, is_exit, read_line},
    error, info, player,
    session::ShuffleSession,
    success, utils, warning,
};

/// Runs an interactive shuffle session over a playlist.
///
/// Every Enter draws a track that has not been played yet, starts it in the
/// Spotify app and, after another Enter (or right away with `reveal`), shows
/// what is playing. Typing `exit` ends the session.
pub fn shuffle(playlist_url: Option<String>, no_play: bool, reveal: bool) {
    let playlist_url = match playlist_url {
        Some(url) => url,
        None => match read_line("Enter Spotify playlist URL: ") {
            Some(url) if !url.is_empty() => url,
            _ => error!("No playlist URL provided"),
        },
    };

    let mut client = connect();
    let tracks = fetch_playlist(&mut client, &playlist_url);

    if tracks.is_empty() {
        error!("No tracks found in the playlist");
    }

    let mut session = ShuffleSession::new(tracks);
    success!("This playlist has {} songs", session.len());

    loop {
        let Some(input) = read_line("\nPress Enter to play a random song, or type 'exit' to quit ")
        else {
            return;
        };
        if is_exit(&input) {
            info!("Goodbye!");
            return;
        }

        let track = match session.draw_next() {
            Ok(track) => track.to_string(),
            Err(_) => {
                success!("No more songs to play!");
                return;
            }
        };

        info!(
            "---- Song {} of {} ----",
            session.played_count(),
            session.len()
        );

        let track_info = match client.get_track_info(&track) {
            Ok(track_info) => track_info,
            Err(e) => {
                warning!("Failed to get track info: {}", e);
                continue;
            }
        };

        if no_play {
            info!("{}", track);
        } else if let Err(e) = player::play(&utils::to_playable_uri(&track)) {
            warning!("Failed to open Spotify: {}", e);
            continue;
        }

        if !reveal {
            match read_line("Press Enter to show song info, or type 'exit' to quit ") {
                Some(input) if !is_exit(&input) => {}
                _ => {
                    info!("Goodbye!");
                    return;
                }
            }
        }

        success!("Now playing: {}", track_info);

        if session.is_exhausted() {
            success!("That was the last song of the playlist!");
            return;
        }
    }
}
