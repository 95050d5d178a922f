use crate::{
    cli::{connect, fetch_playlist},
    success, warning,
};

pub fn tracks(playlist_url: String) {
    let mut client = connect();
    let tracks = fetch_playlist(&mut client, &playlist_url);

    if tracks.is_empty() {
        warning!("No tracks found in the playlist");
        return;
    }

    for track in &tracks {
        println!("{}", track);
    }

    success!("{} tracks", tracks.len());
}
