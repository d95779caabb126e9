//! Retrieval of the user collection. The fetcher performs a single `GET` per call
//! and never touches display state; callers decide what to show.

use super::model::UserRecord;
use anyhow::{anyhow, Result};
use reqwest::Client;
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Default collection endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of decoder error characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Timeout,
    HttpStatus,
    Parse,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Network response was not ok ({code})")]
    HttpStatus { code: u16 },
    #[error("Failed to decode response: {0}")]
    Parse(String),
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Timeout(_) => FetchErrorKind::Timeout,
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            FetchError::Parse(_) => FetchErrorKind::Parse,
        }
    }
}

/// Anything that can produce the user collection.
pub trait UserSource: Send + Sync + 'static {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, FetchError>> + Send;
}

/// HTTP-backed [`UserSource`].
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl Fetcher {
    /// # Errors
    /// Returns an error if the endpoint is not an http(s) URL or the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        match endpoint.scheme() {
            "http" | "https" => {}
            scheme => return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}")),
        }

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            timeout,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_request_error(&self, err: &reqwest::Error) -> FetchError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(err.to_string()),
        }
    }

    /// Fetches and decodes the user collection.
    ///
    /// # Errors
    /// Returns [`FetchError`] on transport failure, timeout, non-success status or an
    /// undecodable body.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!("fetching users");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| self.map_request_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "non-success status");
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.map_request_error(&err))?;

        let users = decode_users(&body)?;
        debug!(count = users.len(), "fetched users");

        Ok(users)
    }
}

impl UserSource for Fetcher {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, FetchError>> + Send {
        self.fetch()
    }
}

/// Decodes a response body into user records.
///
/// # Errors
/// Returns [`FetchError::Parse`] if the body is not a JSON array of user objects.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|err| {
        let message: String = err.to_string().chars().take(MAX_ERROR_CHARS).collect();
        FetchError::Parse(message)
    })
}
