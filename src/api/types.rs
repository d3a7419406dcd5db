//! Endpoint options

/// Options for [`Client::get_user_tweets`](super::Client::get_user_tweets)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TweetsOptions {
    pub include_replies: bool,
    pub include_pinned: bool,
}

impl TweetsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also return the user's replies
    #[must_use]
    pub fn include_replies(mut self) -> Self {
        self.include_replies = true;
        self
    }

    /// Also return the pinned tweet
    #[must_use]
    pub fn include_pinned(mut self) -> Self {
        self.include_pinned = true;
        self
    }
}

/// Options for [`Client::geo_search`](super::Client::geo_search)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoSearchOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in kilometres
    pub radius: u32,
    pub language: Option<String>,
}

impl GeoSearchOptions {
    pub fn new(latitude: f64, longitude: f64, radius: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius,
            language: None,
        }
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
