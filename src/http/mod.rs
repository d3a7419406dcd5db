//! HTTP module
//!
//! Request building and the rate-limited executor.
//!
//! # Features
//!
//! - **URL Building**: Ordered, percent-encoded query strings
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Authentication**: API key and host headers on every request
//! - **Single Attempt**: No retries; failures surface with their cause

mod client;
mod rate_limit;
mod url;

pub use client::{Fetch, HttpClient, API_HOST_HEADER, API_KEY_HEADER};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use url::{build_request, build_url, build_url_with_params};
