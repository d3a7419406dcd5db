// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # twitter154
//!
//! Typed client for the Twitter154 data API (RapidAPI).
//!
//! ## Features
//!
//! - **Typed Results**: Profiles, tweets, followers, replies and favoriters
//!   decode into plain Rust records
//! - **Transparent Pagination**: Continuation-token collections are walked to
//!   the end and returned as one `Vec`
//! - **Rate Limiting**: One shared token bucket per client, safe for
//!   concurrent calls
//! - **Single Attempt**: Failures surface immediately with their cause and a
//!   matchable kind
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twitter154::{Client, ClientConfig, RateLimiterConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder("my-rapidapi-key")
//!         .rate_limit(RateLimiterConfig::per_second(5))
//!         .build()?;
//!     let client = Client::with_config(config);
//!
//!     let user = client.get_user_by_username("nasa").await?;
//!     let followers = client.get_user_followers(&user.user_id).await?;
//!     println!("{} has {} followers", user.username, followers.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Client (api)                             │
//! │  get_user()  get_user_tweets()  get_tweet_replies()  ...        │
//! └─────────────────────────────────────────────────────────────────┘
//!             │ single value                  │ collection
//!             │                     ┌─────────┴─────────┐
//!             │                     │     Paginator     │
//!             │                     └─────────┬─────────┘
//! ┌───────────┴───────────────────────────────┴─────────────────────┐
//! │  Decode (SingleResult / PageResult)                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  HttpClient: headers → rate limiter → send → status → body      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  URL builder            │  ClientConfig (host, limiter, key)    │
//! └─────────────────────────┴───────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and settings files
pub mod config;

/// URL building, rate limiting and the HTTP executor
pub mod http;

/// Single-value and paginated response decoding
pub mod decode;

/// Continuation-token pagination
pub mod pagination;

/// Data records returned by the API
pub mod models;

/// Endpoint client
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use api::{Client, GeoSearchOptions, TweetsOptions};
pub use config::{ClientConfig, ClientConfigBuilder, Settings};
pub use http::{RateLimiter, RateLimiterConfig};
pub use models::{Tweet, User};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
