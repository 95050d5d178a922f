use log::{debug, info};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    error::{Error, Result},
    spotify::transport::{ReqwestTransport, Transport},
    types::{Credentials, Endpoints, TokenResponse},
};

/// Catalog client for the Spotify Web API.
///
/// Owns the credentials, the cached bearer token and the HTTP transport.
/// The token is fetched lazily on the first authenticated request and reused
/// until the API rejects it with `401 Unauthorized`, at which point it is
/// replaced and the request is retried exactly once.
///
/// # Example
///
/// ```no_run
/// use sporlshuffle::{spotify::SpotifyClient, types::Credentials};
///
/// let mut client = SpotifyClient::new(Credentials::new("id", "secret"))?;
/// let tracks = client.get_playlist_tracks("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")?;
/// println!("{} tracks", tracks.len());
/// # Ok::<(), sporlshuffle::error::Error>(())
/// ```
pub struct SpotifyClient {
    credentials: Credentials,
    endpoints: Endpoints,
    access_token: Option<String>,
    transport: Box<dyn Transport>,
}

impl SpotifyClient {
    /// Creates a client talking to the public Spotify endpoints.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(
            credentials,
            endpoints,
            Box::new(transport),
        ))
    }

    /// Creates a client on top of any [`Transport`] implementation.
    pub fn with_transport(
        credentials: Credentials,
        endpoints: Endpoints,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            endpoints,
            access_token: None,
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Drops the cached token so the next request fetches a fresh one.
    pub fn invalidate_token(&mut self) {
        if self.access_token.take().is_some() {
            debug!("Access token invalidated");
        }
    }

    /// Performs the client-credentials exchange and caches the new token.
    ///
    /// The cached token is only replaced on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] if the request fails, the body is not JSON or
    /// it carries no `access_token`.
    pub fn fetch_access_token(&mut self) -> Result<&str> {
        let response = self
            .transport
            .post_form(
                &self.endpoints.token_url,
                &self.credentials.client_id,
                &self.credentials.client_secret,
                &[("grant_type", "client_credentials")],
            )
            .map_err(|e| Error::Auth(format!("failed to get token: {}", e)))?;

        let token: TokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| Error::Auth(format!("error parsing token response: {}", e)))?;

        let access_token = match token.access_token {
            Some(t) if !t.is_empty() => t,
            _ => {
                let reason = token
                    .error_description
                    .or(token.error)
                    .unwrap_or_else(|| format!("status {}", response.status));
                return Err(Error::Auth(format!(
                    "failed to retrieve access token: {}",
                    reason
                )));
            }
        };

        info!(
            "Obtained {} access token (expires in {}s)",
            token.token_type.as_deref().unwrap_or("bearer"),
            token.expires_in.unwrap_or_default()
        );

        let token = self.access_token.insert(access_token);
        Ok(token.as_str())
    }

    fn ensure_token(&mut self) -> Result<String> {
        match &self.access_token {
            Some(token) => Ok(token.clone()),
            None => self.fetch_access_token().map(str::to_string),
        }
    }

    /// Authenticated `GET` decoding the body into `T`.
    ///
    /// A `401` invalidates the token and retries once with a fresh one;
    /// a second `401` is reported as [`Error::Auth`].
    pub(crate) fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        let token = self.ensure_token()?;
        debug!("GET {}", url);
        let mut response = self.transport.get(url, &token)?;

        if response.status == StatusCode::UNAUTHORIZED {
            debug!("Token rejected, fetching a new one");
            self.invalidate_token();
            let token = self.ensure_token()?;
            response = self.transport.get(url, &token)?;

            if response.status == StatusCode::UNAUTHORIZED {
                return Err(Error::Auth(format!(
                    "request to {} rejected after token refresh",
                    url
                )));
            }
        }

        if !response.status.is_success() {
            return Err(Error::Network(format!(
                "unexpected status {} from {}",
                response.status, url
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| Error::Network(format!("error parsing response from {}: {}", url, e)))
    }
}
