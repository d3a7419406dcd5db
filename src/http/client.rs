//! Rate-limited request executor
//!
//! [`HttpClient`] issues one GET per call: it builds the URL, attaches the
//! API credentials, waits for the shared rate limiter, sends the request
//! once and hands back the raw body of a 2xx response.

use super::url::{build_request, build_url_with_params};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::types::Param;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderValue;
use tracing::{debug, warn};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the target host
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Source of raw response bodies for a path and parameter list
///
/// The paginator depends on this rather than on [`HttpClient`] directly.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the body for `path` with `params`
    async fn fetch(&self, path: &[String], params: &[Param]) -> Result<Bytes>;
}

/// HTTP executor bound to one [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    /// Create an executor for the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a path and parameter list on the configured host
    pub fn url(&self, path: &[String], params: &[Param]) -> String {
        build_url_with_params(self.config.scheme(), self.config.host(), path, params)
    }

    /// Make a GET request and return the body
    pub async fn get(&self, path: &[String], params: &[Param]) -> Result<Bytes> {
        let url = self.url(path, params);
        let request =
            build_request(self.config.http_client(), &url).context("create request")?;
        self.execute(request).await
    }

    /// Send a prepared request
    ///
    /// Exactly one attempt is made. A status outside 200..=299 is an error
    /// carrying the code; the body is returned in full otherwise.
    pub async fn execute(&self, mut request: reqwest::Request) -> Result<Bytes> {
        let mut api_key = HeaderValue::from_str(self.config.api_key())?;
        api_key.set_sensitive(true);
        let headers = request.headers_mut();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(API_HOST_HEADER, HeaderValue::from_str(self.config.host())?);

        self.config.rate_limiter().wait().await;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "Sending request");

        let response = self
            .config
            .http_client()
            .execute(request)
            .await
            .map_err(Error::Send)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Request failed");
            return Err(Error::http_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(Error::ReadBody)?;
        debug!(%url, bytes = body.len(), "Request succeeded");
        Ok(body)
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch(&self, path: &[String], params: &[Param]) -> Result<Bytes> {
        self.get(path, params).await
    }
}
