//! Data records returned by the API
//!
//! Field names follow the remote JSON. Every record tolerates missing fields.
//! Fields the remote is known to send as `null` are `Option`s; a `null` in any
//! other field decodes as that field's default.

use crate::decode::null_as_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of `creation_date` values, e.g. `Mon Jan 13 18:44:09 +0000 2014`
pub const CREATION_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a remote `creation_date` string
pub fn parse_creation_date(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, CREATION_DATE_FORMAT).ok()
}

// ============================================================================
// Users
// ============================================================================

/// Public profile of an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub creation_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub follower_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub following_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub favourites_count: i64,
    pub is_private: Option<bool>,
    pub is_verified: Option<bool>,
    pub is_blue_verified: Option<bool>,
    pub location: Option<String>,
    pub profile_pic_url: Option<String>,
    pub profile_banner_url: Option<String>,
    pub description: Option<String>,
    pub external_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_tweets: i64,
    pub bot: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    pub has_nft_avatar: Option<bool>,
    pub category: Option<UserCategory>,
    pub default_profile: Option<bool>,
    pub default_profile_image: Option<bool>,
}

impl User {
    /// Account creation time
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_creation_date(&self.creation_date)
    }
}

/// Professional category attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
}

// ============================================================================
// Tweets
// ============================================================================

/// A single post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    #[serde(deserialize_with = "null_as_default")]
    pub tweet_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creation_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub media_url: Option<Vec<String>>,
    pub video_url: Option<Vec<VideoUrl>>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub retweet_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reply_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub retweet: bool,
    pub views: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    pub video_view_count: Option<i64>,
    pub in_reply_to_status_id: Option<Value>,
    pub quoted_status_id: Option<Value>,
    pub binding_values: Option<Vec<BindingValue>>,
    pub expanded_url: Option<String>,
    pub retweet_tweet_id: Option<Value>,
    pub extended_entities: Option<ExtendedEntities>,
    pub conversation_id: Option<String>,
    pub retweet_status: Option<Value>,
}

impl Tweet {
    /// Post creation time
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_creation_date(&self.creation_date)
    }

    /// Whether the post answers another post
    pub fn is_reply(&self) -> bool {
        self.in_reply_to_status_id
            .as_ref()
            .is_some_and(|id| !id.is_null())
    }
}

/// One encoding of an attached video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoUrl {
    pub bitrate: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Card key/value pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingValue {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    pub value: Value,
}

// ============================================================================
// Media
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedEntities {
    #[serde(deserialize_with = "null_as_default")]
    pub media: Vec<Media>,
}

/// Attached photo, GIF or video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(deserialize_with = "null_as_default")]
    pub display_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expanded_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub indices: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub media_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media_url_https: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub additional_media_info: Option<AdditionalMediaInfo>,
    #[serde(rename = "mediaStats")]
    pub media_stats: Option<MediaStats>,
    pub ext_media_availability: Option<MediaAvailability>,
    pub sizes: Option<MediaSizes>,
    pub original_info: Option<OriginalInfo>,
    pub video_info: Option<VideoInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalMediaInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub monetizable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaStats {
    #[serde(rename = "viewCount")]
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaAvailability {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSizes {
    #[serde(deserialize_with = "null_as_default")]
    pub large: MediaSize,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: MediaSize,
    #[serde(deserialize_with = "null_as_default")]
    pub small: MediaSize,
    #[serde(deserialize_with = "null_as_default")]
    pub thumb: MediaSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSize {
    #[serde(deserialize_with = "null_as_default")]
    pub h: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub w: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub resize: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub aspect_ratio: Vec<i64>,
    pub duration_millis: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub variants: Vec<VideoUrl>,
}
