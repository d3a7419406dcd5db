//! Common types used throughout the client
//!
//! Query parameters, URL schemes, and small string helpers shared by the
//! request builder, the paginator, and the endpoint shims.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered URL path segments, joined with `/`
pub type PathSegments = Vec<String>;

// ============================================================================
// Query Parameters
// ============================================================================

/// A single query parameter
///
/// Order matters: the request builder emits parameters in the order they
/// appear in the list. The value is stored already rendered as text and is
/// percent-encoded only when the URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    /// Create a parameter from any value that renders as text
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Replace the value, keeping the key and position
    pub fn set_value(&mut self, value: impl ToString) {
        self.value = value.to_string();
    }
}

impl<K: Into<String>, V: ToString> From<(K, V)> for Param {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Turn a list of string slices into owned path segments
pub fn segments(parts: &[&str]) -> PathSegments {
    parts.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Scheme
// ============================================================================

/// URL scheme used to reach the API host
///
/// The remote is only served over HTTPS. Plain HTTP exists for local mock
/// servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
