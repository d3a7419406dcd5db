//! Response decoder module
//!
//! Supports: single-value responses and paginated responses
//!
//! # Overview
//!
//! Every endpoint answers with JSON in one of two shapes. A response type
//! opts into a shape by implementing [`SingleResult`] (the body decodes to
//! one logical value) or [`PageResult`] (the body decodes to a list of items
//! plus a continuation token). The shape is bound at the call site:
//!
//! ```rust,ignore
//! let username = decode_single::<UsernameResponse>(&body)?;
//! let page = decode_page::<FollowsResponse>(&body)?;
//! ```

mod decoders;
mod types;

pub use decoders::{decode_page, decode_single};
pub use types::{null_as_default, Direct, Page, PageResult, SingleResult};

#[cfg(test)]
mod tests;
