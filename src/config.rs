//! Client configuration
//!
//! [`ClientConfig`] is the resolved, immutable set of settings every request
//! is issued with: target host, shared rate limiter, HTTP transport and API
//! key. It is produced once by [`ClientConfigBuilder::build`], which validates
//! the options and fills in defaults for whatever was left unset.
//!
//! [`Settings`] is the serializable form used by the CLI (YAML file plus
//! environment overrides). It converts into a builder.

use crate::error::{Error, Result, ResultExt};
use crate::http::{RateLimiter, RateLimiterConfig};
use crate::types::{OptionStringExt, Scheme};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "twitter154.p.rapidapi.com";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "TWITTER154_API_KEY";

/// Environment variable overriding the API host
pub const ENV_HOST: &str = "TWITTER154_HOST";

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Resolved client configuration
///
/// Cheap to clone: the rate limiter and the reqwest client are both
/// reference counted, so clones share one bucket and one connection pool.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    host: String,
    scheme: Scheme,
    rate_limiter: RateLimiter,
    http: reqwest::Client,
}

impl ClientConfig {
    /// Start building a configuration for the given API key
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(api_key)
    }

    /// Configuration with every default applied
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
///
/// Setters only record values; nothing is validated until [`build`].
/// Calling a setter twice keeps the last value.
///
/// [`build`]: ClientConfigBuilder::build
#[derive(Default)]
pub struct ClientConfigBuilder {
    api_key: String,
    host: Option<String>,
    scheme: Option<Scheme>,
    rate_limiter: Option<RateLimiter>,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl std::fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("rate_limiter", &self.rate_limiter)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfigBuilder {
    /// Create a builder for the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the API host (authority only, e.g. `twitter154.p.rapidapi.com`)
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the URL scheme
    #[must_use]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Use an existing, possibly shared, rate limiter
    #[must_use]
    pub fn rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Create a dedicated rate limiter from a config
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(RateLimiter::new(&config));
        self
    }

    /// Use an existing HTTP transport
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Request timeout for the default transport
    ///
    /// Ignored when a transport is supplied with [`http_client`].
    ///
    /// [`http_client`]: ClientConfigBuilder::http_client
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User agent for the default transport
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate the options and resolve defaults
    pub fn build(self) -> Result<ClientConfig> {
        let scheme = self.scheme.unwrap_or_default();

        let host = match self.host.none_if_empty() {
            Some(host) => {
                validate_host(&host, scheme).context("bad option")?;
                host
            }
            None => DEFAULT_HOST.to_string(),
        };

        let rate_limiter = self.rate_limiter.unwrap_or_else(RateLimiter::unlimited);

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("twitter154/{}", env!("CARGO_PKG_VERSION")));
                let mut builder = reqwest::Client::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::config(format!("build HTTP transport: {e}")))?
            }
        };

        Ok(ClientConfig {
            api_key: self.api_key,
            host,
            scheme,
            rate_limiter,
            http,
        })
    }
}

/// Check that `host` is a bare authority that forms a valid request URL
fn validate_host(host: &str, scheme: Scheme) -> Result<()> {
    let url = Url::parse(&format!("{scheme}://{host}"))
        .map_err(|e| Error::invalid_host(host, e))?;

    if url.host_str().is_none() {
        return Err(Error::invalid_host(host, "missing host name"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(Error::invalid_host(
            host,
            "expected an authority without path, query or fragment",
        ));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(Error::invalid_host(host, "credentials are not allowed"));
    }
    Ok(())
}

// ============================================================================
// File / Environment Settings
// ============================================================================

/// Serializable client settings
///
/// ```yaml
/// api_key: "..."
/// host: twitter154.p.rapidapi.com
/// requests_per_second: 5
/// timeout_secs: 30
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub scheme: Option<Scheme>,
    pub requests_per_second: Option<u32>,
    pub burst_size: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))
    }

    /// Override fields from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields using an arbitrary variable lookup
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_API_KEY).none_if_empty() {
            self.api_key = Some(key);
        }
        if let Some(host) = lookup(ENV_HOST).none_if_empty() {
            self.host = Some(host);
        }
        self
    }

    /// Rate limit described by these settings, if any
    pub fn rate_limit(&self) -> Option<RateLimiterConfig> {
        self.requests_per_second.map(|rps| {
            RateLimiterConfig::new(rps, self.burst_size.unwrap_or(1))
        })
    }

    /// Convert into a builder; fails when no API key is present
    pub fn into_builder(self) -> Result<ClientConfigBuilder> {
        let rate_limit = self.rate_limit();
        let api_key = self
            .api_key
            .none_if_empty()
            .ok_or_else(|| Error::config(format!("missing api_key (set {ENV_API_KEY})")))?;

        let mut builder = ClientConfigBuilder::new(api_key);
        if let Some(host) = self.host {
            builder = builder.host(host);
        }
        if let Some(scheme) = self.scheme {
            builder = builder.scheme(scheme);
        }
        if let Some(config) = rate_limit {
            builder = builder.rate_limit(config);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        Ok(builder)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("requests_per_second", &self.requests_per_second)
            .field("burst_size", &self.burst_size)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
