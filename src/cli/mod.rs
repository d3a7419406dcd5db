//! CLI module
//!
//! Command-line interface over the endpoint client.
//!
//! # Commands
//!
//! - `username` - Username for a user ID
//! - `user` - Profile by ID or username
//! - `tweets` - All tweets of a user
//! - `following` / `followers` - All accounts on either side of a user
//! - `tweet` - Details of one tweet
//! - `replies` / `favoriters` - All replies to, or favoriters of, a tweet

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
