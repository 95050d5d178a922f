use sporlshuffle::types::{TrackInfo, TrackResponse};
use sporlshuffle::utils::*;

#[test]
fn test_is_web_reference() {
    assert!(is_web_reference("https://open.spotify.com/playlist/abc"));
    assert!(is_web_reference("https://open.spotify.com/track/abc?si=1"));

    // Other hosts and schemes are rejected
    assert!(!is_web_reference("http://open.spotify.com/playlist/abc"));
    assert!(!is_web_reference("https://api.spotify.com/v1/playlists/abc"));
    assert!(!is_web_reference("spotify:playlist:abc"));
    assert!(!is_web_reference(""));
}

#[test]
fn test_resource_id_strips_query() {
    assert_eq!(resource_id("https://service/playlists/PID?foo=bar"), "PID");
    assert_eq!(
        resource_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc&pt=1"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
    assert_eq!(resource_id("https://open.spotify.com/track/abc123"), "abc123");
}

#[test]
fn test_resource_id_uses_last_segment() {
    assert_eq!(
        resource_id("https://open.spotify.com/intl-de/track/xyz"),
        "xyz"
    );
    assert_eq!(resource_id("no-slashes-at-all"), "no-slashes-at-all");
}

#[test]
fn test_resource_id_empty() {
    // Trailing slash leaves nothing after the last separator
    assert_eq!(resource_id("https://open.spotify.com/playlist/"), "");
    assert_eq!(resource_id("https://open.spotify.com/playlist/?si=abc"), "");
    assert_eq!(resource_id(""), "");
}

#[test]
fn test_to_playable_uri() {
    assert_eq!(
        to_playable_uri("https://open.spotify.com/track/abc123?si=xyz"),
        "spotify:track:abc123:play"
    );
    assert_eq!(
        to_playable_uri("https://open.spotify.com/episode/ep1"),
        "spotify:episode:ep1:play"
    );
}

#[test]
fn test_to_playable_uri_skips_locale() {
    assert_eq!(
        to_playable_uri("https://open.spotify.com/intl-de/track/abc123?si=xyz"),
        "spotify:track:abc123:play"
    );
}

#[test]
fn test_to_playable_uri_passthrough() {
    // Anything that is not a share link comes back unchanged
    for input in [
        "spotify:track:abc123",
        "https://example.com/track/abc123",
        "http://open.spotify.com/track/abc123",
        "",
        "not a url",
    ] {
        assert_eq!(to_playable_uri(input), input);
    }

    // Share links without an id are unchanged as well
    assert_eq!(
        to_playable_uri("https://open.spotify.com/track"),
        "https://open.spotify.com/track"
    );
}

#[test]
fn test_to_playable_uri_is_pure() {
    let input = "https://open.spotify.com/track/abc123?si=xyz";
    assert_eq!(to_playable_uri(input), to_playable_uri(input));
}

#[test]
fn test_track_info_from_full_response() {
    let response: TrackResponse = serde_json::from_str(
        r#"{
            "name": "Song",
            "artists": [{"name": "A"}, {"name": "B"}],
            "album": {"release_date": "1999-05-01"}
        }"#,
    )
    .unwrap();

    let info = TrackInfo::from(response);
    assert_eq!(info.name, "Song");
    assert_eq!(info.artists, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(info.year, "1999");
    assert_eq!(info.to_string(), "Song by A, B (1999)");
}

#[test]
fn test_track_info_year_precision() {
    // Spotify only returns the year for some releases
    let response: TrackResponse =
        serde_json::from_str(r#"{"name": "Old", "album": {"release_date": "1969"}}"#).unwrap();
    assert_eq!(TrackInfo::from(response).year, "1969");
}

#[test]
fn test_track_info_missing_fields() {
    let response: TrackResponse =
        serde_json::from_str(r#"{"artists": [{"id": "x"}, {"name": "Named"}]}"#).unwrap();

    let info = TrackInfo::from(response);
    assert_eq!(info.name, "");
    assert_eq!(info.artists, vec!["Named".to_string()]);
    assert_eq!(info.year, "");
    assert_eq!(info.to_string(), " by Named");
}
