use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};

use crate::error::{Error, Result};

/// Every request blocks for at most this long before failing.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(45);

/// Status and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The two kinds of request the catalog client makes.
///
/// Implementations only report transport failures as errors; non-success
/// statuses are returned as regular responses and judged by the caller.
pub trait Transport {
    /// `GET url` with `Authorization: Bearer <token>`.
    fn get(&self, url: &str, bearer_token: &str) -> Result<HttpResponse>;

    /// `POST url` with a form-encoded body and HTTP Basic authentication.
    fn post_form(
        &self,
        url: &str,
        username: &str,
        password: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client })
    }

    fn complete(response: reqwest::blocking::Response) -> Result<HttpResponse> {
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::Network(format!("failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, bearer_token: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .map_err(|e| Error::Network(e.to_string()))?;

        Self::complete(response)
    }

    fn post_form(
        &self,
        url: &str,
        username: &str,
        password: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .basic_auth(username, Some(password))
            .form(form)
            .send()
            .map_err(|e| Error::Network(e.to_string()))?;

        Self::complete(response)
    }
}
