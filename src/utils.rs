/// Prefix every public Spotify share link starts with.
pub const SPOTIFY_WEB_URL: &str = "https://open.spotify.com/";

/// Scheme of the identifiers the desktop player understands.
pub const SPOTIFY_URI_SCHEME: &str = "spotify";

pub fn is_web_reference(reference: &str) -> bool {
    reference.starts_with(SPOTIFY_WEB_URL)
}

fn strip_query(segment: &str) -> &str {
    segment.split('?').next().unwrap_or_default()
}

/// Extracts the resource ID of a reference: its last path segment without
/// any query string.
///
/// ```text
/// https://open.spotify.com/playlist/PID?si=abc  ->  PID
/// ```
///
/// Returns an empty string for references ending in `/`.
pub fn resource_id(reference: &str) -> &str {
    let last = reference.rsplit('/').next().unwrap_or_default();
    strip_query(last)
}

/// Converts a share link into the `spotify:<type>:<id>:play` form handed to
/// the desktop player.
///
/// A leading locale segment (`intl-de/`) is skipped. Anything that is not a
/// share link with at least a type and an id is returned unchanged.
pub fn to_playable_uri(reference: &str) -> String {
    let Some(path) = reference.strip_prefix(SPOTIFY_WEB_URL) else {
        return reference.to_string();
    };

    let mut parts = path.split('/').peekable();
    if parts.peek().is_some_and(|p| p.starts_with("intl-")) {
        parts.next();
    }

    match (parts.next(), parts.next()) {
        (Some(kind), Some(id)) => format!(
            "{scheme}:{kind}:{id}:play",
            scheme = SPOTIFY_URI_SCHEME,
            kind = kind,
            id = strip_query(id)
        ),
        _ => reference.to_string(),
    }
}
