//! Decoder types and traits
//!
//! Defines the two response shapes and the page they produce.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One HTTP round trip's worth of paginated items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in the order the remote returned them
    pub items: Vec<T>,
    /// Continuation token for the next request; may be empty
    pub token: String,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            token: token.into(),
        }
    }

    /// An empty item list marks the end of the stream
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A response body that decodes into exactly one logical value
pub trait SingleResult: DeserializeOwned {
    /// The value handed back to the caller
    type Output;

    /// Extract the value from the decoded response
    fn into_result(self) -> Self::Output;
}

/// A response body that decodes into a page of items plus a token
pub trait PageResult: DeserializeOwned {
    /// Item type accumulated across pages
    type Item;

    /// Split the decoded response into its items and token
    fn into_page(self) -> Page<Self::Item>;
}

/// Response whose whole body is the value
///
/// Used for endpoints such as user details where the JSON object is the
/// record itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Direct<T>(pub T);

impl<T: DeserializeOwned> SingleResult for Direct<T> {
    type Output = T;

    fn into_result(self) -> T {
        self.0
    }
}

/// Deserialize `null` as the type's default value
///
/// Combine with `#[serde(default)]` so a missing field behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
