//! User endpoints

use super::responses::{UserFollowsResponse, UserTweetsResponse, UsernameResponse};
use super::types::TweetsOptions;
use super::{Client, PAGE_LIMIT};
use crate::decode::Direct;
use crate::error::{Result, ResultExt};
use crate::models::{Tweet, User};
use crate::types::{segments, Param};

impl Client {
    /// Username for a user ID
    pub async fn get_username(&self, user_id: &str) -> Result<String> {
        self.get_result::<UsernameResponse>(
            segments(&["user", "username"]),
            vec![Param::new("user_id", user_id)],
        )
        .await
        .with_context(|| format!("get username of {user_id}"))
    }

    /// Public profile for a user ID
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get_result::<Direct<User>>(
            segments(&["user", "details"]),
            vec![Param::new("user_id", user_id)],
        )
        .await
        .with_context(|| format!("get user {user_id}"))
    }

    /// Public profile for a username
    pub async fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.get_result::<Direct<User>>(
            segments(&["user", "details"]),
            vec![Param::new("username", username)],
        )
        .await
        .with_context(|| format!("get user @{username}"))
    }

    /// Every tweet on a user's timeline
    pub async fn get_user_tweets(
        &self,
        user_id: &str,
        options: TweetsOptions,
    ) -> Result<Vec<Tweet>> {
        let params = vec![
            Param::new("user_id", user_id),
            Param::new("limit", PAGE_LIMIT),
            Param::new("include_replies", options.include_replies),
            Param::new("include_pinned", options.include_pinned),
        ];

        self.get_result_paginated::<UserTweetsResponse>(segments(&["user", "tweets"]), params)
            .await
            .with_context(|| format!("get tweets of {user_id}"))
    }

    /// Every account the user follows
    pub async fn get_user_following(&self, user_id: &str) -> Result<Vec<User>> {
        self.get_result_paginated::<UserFollowsResponse>(
            segments(&["user", "following"]),
            vec![Param::new("user_id", user_id), Param::new("limit", PAGE_LIMIT)],
        )
        .await
        .with_context(|| format!("get following of {user_id}"))
    }

    /// Every account following the user
    pub async fn get_user_followers(&self, user_id: &str) -> Result<Vec<User>> {
        self.get_result_paginated::<UserFollowsResponse>(
            segments(&["user", "followers"]),
            vec![Param::new("user_id", user_id), Param::new("limit", PAGE_LIMIT)],
        )
        .await
        .with_context(|| format!("get followers of {user_id}"))
    }
}
