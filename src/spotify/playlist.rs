use log::debug;

use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::PlaylistTracksPage,
    utils,
};

/// Spotify's maximum page size for playlist items.
pub const PAGE_SIZE: usize = 100;

impl SpotifyClient {
    /// Fetches the share links of every track in a playlist, in playlist order.
    ///
    /// Pages are requested sequentially with `limit=100` starting at offset 0.
    /// Items without a track URL (removed or local tracks) are skipped. The
    /// loop ends once as many raw items as the declared `total` have been
    /// seen, or when the API returns an empty page.
    ///
    /// An empty playlist yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the reference is not a share link or has no
    ///   playlist ID. Nothing is sent in that case.
    /// - [`Error::Auth`] if no token can be obtained.
    /// - [`Error::Network`] on transport failures, error statuses or
    ///   undecodable pages.
    pub fn get_playlist_tracks(&mut self, playlist_url: &str) -> Result<Vec<String>> {
        if !utils::is_web_reference(playlist_url) {
            return Err(Error::Validation(format!(
                "{} is not a Spotify link (expected {}...)",
                playlist_url,
                utils::SPOTIFY_WEB_URL
            )));
        }

        let playlist_id = utils::resource_id(playlist_url);
        if playlist_id.is_empty() {
            return Err(Error::Validation(format!(
                "no playlist ID in {}",
                playlist_url
            )));
        }

        let mut track_links = Vec::new();
        let mut seen = 0;
        let mut offset = 0;

        loop {
            let api_url = format!(
                "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
                uri = self.endpoints().api_url,
                id = playlist_id,
                limit = PAGE_SIZE,
                offset = offset
            );

            let page: PlaylistTracksPage = self.get_json(&api_url)?;
            let page_len = page.items.len();
            seen += page_len;

            track_links.extend(
                page.items
                    .iter()
                    .filter_map(|item| item.track_url())
                    .map(str::to_string),
            );

            debug!(
                "Playlist {}: offset {}, {} items, {}/{} seen",
                playlist_id, offset, page_len, seen, page.total
            );

            if page_len == 0 || (seen as u64) >= page.total {
                break;
            }

            offset += PAGE_SIZE;
        }

        Ok(track_links)
    }
}
