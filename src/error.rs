//! Error types for the twitter154 client
//!
//! Every public API returns `Result<T, Error>`. Layers add context with
//! [`ResultExt`] while keeping the underlying kind reachable via
//! [`Error::root`], so callers can still branch on a bad status or an
//! unsupported endpoint after the error has travelled up the call chain.

use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to create request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("Send request failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("Bad status code {status}")]
    HttpStatus { status: u16 },

    #[error("Read response body failed: {0}")]
    ReadBody(#[source] reqwest::Error),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Unmarshal response failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Serialize output failed: {0}")]
    Serialize(#[source] serde_json::Error),

    // ============================================================================
    // Endpoint Errors
    // ============================================================================
    #[error("Not implemented: {operation}")]
    NotImplemented { operation: &'static str },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Context
    // ============================================================================
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid host error
    pub fn invalid_host(host: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidHost {
            host: host.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a not-implemented error for the named operation
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    /// Strip every layer of context and return the error that started it
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Check if the endpoint is not supported by this client
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.root(), Error::NotImplemented { .. })
    }

    /// Check if the error came from decoding a response body
    pub fn is_decode(&self) -> bool {
        matches!(self.root(), Error::Decode(_))
    }

    /// HTTP status code, if the remote answered outside the 2xx range
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Error::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}
