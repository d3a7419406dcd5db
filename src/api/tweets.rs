//! Tweet endpoints

use super::responses::{TweetFavoritersResponse, TweetRepliesResponse};
use super::Client;
use crate::decode::Direct;
use crate::error::{Result, ResultExt};
use crate::models::{Tweet, User};
use crate::types::{segments, Param};

impl Client {
    /// General information about a tweet
    pub async fn get_tweet_details(&self, tweet_id: &str) -> Result<Tweet> {
        self.get_result::<Direct<Tweet>>(
            segments(&["tweet", "details"]),
            vec![Param::new("tweet_id", tweet_id)],
        )
        .await
        .with_context(|| format!("get tweet {tweet_id}"))
    }

    /// Every reply to a tweet
    pub async fn get_tweet_replies(&self, tweet_id: &str) -> Result<Vec<Tweet>> {
        self.get_result_paginated::<TweetRepliesResponse>(
            segments(&["tweet", "replies"]),
            vec![Param::new("tweet_id", tweet_id)],
        )
        .await
        .with_context(|| format!("get replies to {tweet_id}"))
    }

    /// Every user who favorited a tweet
    pub async fn get_tweet_user_favorites(&self, tweet_id: &str) -> Result<Vec<User>> {
        self.get_result_paginated::<TweetFavoritersResponse>(
            segments(&["tweet", "favoriters"]),
            vec![Param::new("tweet_id", tweet_id)],
        )
        .await
        .with_context(|| format!("get favoriters of {tweet_id}"))
    }
}
