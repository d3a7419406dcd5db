//! Response shapes
//!
//! One type per JSON envelope the API returns, each bound to the single-value
//! or paginated decoder.

use crate::decode::{null_as_default, Page, PageResult, SingleResult};
use crate::models::{Tweet, User};
use serde::Deserialize;

/// `user/username`
#[derive(Debug, Deserialize)]
pub struct UsernameResponse {
    #[serde(default)]
    pub user_id: String,
    pub username: String,
}

impl SingleResult for UsernameResponse {
    type Output = String;

    fn into_result(self) -> String {
        self.username
    }
}

/// `user/tweets`
#[derive(Debug, Deserialize)]
pub struct UserTweetsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Tweet>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continuation_token: String,
}

impl PageResult for UserTweetsResponse {
    type Item = Tweet;

    fn into_page(self) -> Page<Tweet> {
        Page::new(self.results, self.continuation_token)
    }
}

/// `user/following` and `user/followers`
#[derive(Debug, Deserialize)]
pub struct UserFollowsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continuation_token: String,
}

impl PageResult for UserFollowsResponse {
    type Item = User;

    fn into_page(self) -> Page<User> {
        Page::new(self.results, self.continuation_token)
    }
}

/// `tweet/replies`
#[derive(Debug, Deserialize)]
pub struct TweetRepliesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub replies: Vec<Tweet>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continuation_token: String,
}

impl PageResult for TweetRepliesResponse {
    type Item = Tweet;

    fn into_page(self) -> Page<Tweet> {
        Page::new(self.replies, self.continuation_token)
    }
}

/// `tweet/favoriters`
#[derive(Debug, Deserialize)]
pub struct TweetFavoritersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub favoriters: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continuation_token: String,
}

impl PageResult for TweetFavoritersResponse {
    type Item = User;

    fn into_page(self) -> Page<User> {
        Page::new(self.favoriters, self.continuation_token)
    }
}
