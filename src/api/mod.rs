//! Endpoint client
//!
//! [`Client`] exposes one async method per remote operation. Each method
//! only names its path, its parameters and its response shape; fetching,
//! decoding and pagination are handled by the generic engine.
//!
//! ```rust,ignore
//! use twitter154::{Client, TweetsOptions};
//!
//! let client = Client::new("my-rapidapi-key")?;
//! let user = client.get_user_by_username("nasa").await?;
//! let tweets = client
//!     .get_user_tweets(&user.user_id, TweetsOptions::new().include_replies())
//!     .await?;
//! ```

mod responses;
mod tweets;
mod types;
mod unsupported;
mod users;

pub use responses::{
    TweetFavoritersResponse, TweetRepliesResponse, UserFollowsResponse, UserTweetsResponse,
    UsernameResponse,
};
pub use types::{GeoSearchOptions, TweetsOptions};

use crate::config::ClientConfig;
use crate::decode::{decode_single, PageResult, SingleResult};
use crate::error::{Result, ResultExt};
use crate::http::HttpClient;
use crate::pagination::paginate;
use crate::types::{Param, PathSegments};

/// Page size requested from endpoints that accept a `limit`
pub const PAGE_LIMIT: u32 = 100;

/// Client for the Twitter154 API
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client with default settings for the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_config(ClientConfig::new(api_key)?))
    }

    /// Create a client from a resolved configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Fetch one response and decode it as a single value
    pub async fn get_result<R: SingleResult>(
        &self,
        path: PathSegments,
        params: Vec<Param>,
    ) -> Result<R::Output> {
        let body = self.http.get(&path, &params).await.context("get")?;
        decode_single::<R>(&body).context("decode response")
    }

    /// Fetch every page of a collection
    pub async fn get_result_paginated<R: PageResult>(
        &self,
        path: PathSegments,
        params: Vec<Param>,
    ) -> Result<Vec<R::Item>> {
        paginate::<R, _>(&self.http, path, params).await
    }
}
