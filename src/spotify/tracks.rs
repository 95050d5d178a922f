use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{TrackInfo, TrackResponse},
    utils,
};

impl SpotifyClient {
    /// Fetches name, artists and release year of a single track.
    ///
    /// Missing fields come back empty rather than failing the call.
    pub fn get_track_info(&mut self, track_url: &str) -> Result<TrackInfo> {
        let track_id = utils::resource_id(track_url);
        if track_id.is_empty() {
            return Err(Error::Validation(format!("no track ID in {}", track_url)));
        }

        let api_url = format!(
            "{uri}/tracks/{id}",
            uri = self.endpoints().api_url,
            id = track_id
        );

        let track: TrackResponse = self.get_json(&api_url)?;
        Ok(track.into())
    }
}
