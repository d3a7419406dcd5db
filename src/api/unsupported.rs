//! Operations the remote offers but this client does not support yet
//!
//! Each returns [`Error::NotImplemented`] without touching the network.

use super::types::GeoSearchOptions;
use super::Client;
use crate::error::{Error, Result};
use crate::models::{Tweet, User};
use serde_json::Value;

impl Client {
    /// Tweets liked by a user
    pub async fn get_user_likes(&self, _user_id: &str) -> Result<Vec<Tweet>> {
        Err(Error::not_implemented("get_user_likes"))
    }

    /// Media posted by a user
    pub async fn get_user_media(&self, _user_id: &str) -> Result<Vec<Value>> {
        Err(Error::not_implemented("get_user_media"))
    }

    /// Users who retweeted a tweet
    pub async fn get_tweet_user_retweets(&self, _tweet_id: &str) -> Result<Vec<User>> {
        Err(Error::not_implemented("get_tweet_user_retweets"))
    }

    /// Tweets matching a query
    pub async fn search(&self, _query: &str) -> Result<Vec<Tweet>> {
        Err(Error::not_implemented("search"))
    }

    /// Tweets matching a query around a location
    pub async fn geo_search(
        &self,
        _query: &str,
        _options: GeoSearchOptions,
    ) -> Result<Vec<Tweet>> {
        Err(Error::not_implemented("geo_search"))
    }

    /// Tweets carrying a hashtag
    pub async fn hashtag(&self, _hashtag: &str) -> Result<Vec<Tweet>> {
        Err(Error::not_implemented("hashtag"))
    }

    /// Details of a list
    pub async fn get_list_details(&self, _list_id: &str) -> Result<Value> {
        Err(Error::not_implemented("get_list_details"))
    }

    /// Tweets from a list's members
    pub async fn get_list_tweets(&self, _list_id: &str) -> Result<Vec<Tweet>> {
        Err(Error::not_implemented("get_list_tweets"))
    }

    /// Trending topics for a Yahoo! WOEID
    pub async fn get_trends(&self, _woeid: i64) -> Result<Vec<Value>> {
        Err(Error::not_implemented("get_trends"))
    }

    /// Locations with trend data
    pub async fn get_locations(&self) -> Result<Vec<Value>> {
        Err(Error::not_implemented("get_locations"))
    }
}
