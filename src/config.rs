//! Configuration management for Sporlshuffle.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the endpoint URLs

use std::{env, path::PathBuf};

use crate::{
    error::{Error, Result},
    types::{Credentials, Endpoints},
};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

/// Path of the optional `.env` file.
///
/// - Linux: `~/.local/share/sporlshuffle/.env`
/// - macOS: `~/Library/Application Support/sporlshuffle/.env`
/// - Windows: `%LOCALAPPDATA%/sporlshuffle/.env`
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlshuffle/.env");
    path
}

/// Loads the `.env` file from the local data directory if there is one.
///
/// Variables already set in the process environment are not overridden.
/// A missing file is not an error; an unreadable one is.
pub fn load_env() -> Result<()> {
    let path = env_path();
    if !path.is_file() {
        log::debug!("No environment file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", name))),
    }
}

/// Client credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
pub fn credentials() -> Result<Credentials> {
    Ok(Credentials::new(
        required(CLIENT_ID_VAR)?,
        required(CLIENT_SECRET_VAR)?,
    ))
}

/// Endpoint URLs, with `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL` as
/// optional overrides of the public Spotify endpoints.
pub fn endpoints() -> Endpoints {
    let defaults = Endpoints::default();
    Endpoints {
        api_url: env::var(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url),
        token_url: env::var(TOKEN_URL_VAR).unwrap_or(defaults.token_url),
    }
}
