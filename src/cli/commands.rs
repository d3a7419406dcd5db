//! CLI commands and argument parsing

use crate::config::ENV_API_KEY;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Twitter154 API client
#[derive(Parser, Debug)]
#[command(name = "twitter154")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// RapidAPI key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Maximum requests per second
    #[arg(long, global = true)]
    pub rate: Option<u32>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Username for a user ID
    Username {
        user_id: String,
    },

    /// Profile of a user
    User {
        /// Look up by user ID
        #[arg(long, conflicts_with = "username", required_unless_present = "username")]
        id: Option<String>,

        /// Look up by username
        #[arg(long)]
        username: Option<String>,
    },

    /// All tweets of a user
    Tweets {
        user_id: String,

        /// Include replies
        #[arg(long)]
        include_replies: bool,

        /// Include the pinned tweet
        #[arg(long)]
        include_pinned: bool,
    },

    /// All accounts a user follows
    Following {
        user_id: String,
    },

    /// All followers of a user
    Followers {
        user_id: String,
    },

    /// Details of a tweet
    Tweet {
        tweet_id: String,
    },

    /// All replies to a tweet
    Replies {
        tweet_id: String,
    },

    /// All users who favorited a tweet
    Favoriters {
        tweet_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tweets_flags() {
        let cli = Cli::try_parse_from([
            "twitter154",
            "--api-key",
            "k",
            "tweets",
            "44196397",
            "--include-pinned",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(cli.pretty);
        assert_eq!(
            cli.command,
            Commands::Tweets {
                user_id: "44196397".to_string(),
                include_replies: false,
                include_pinned: true,
            }
        );
    }

    #[test]
    fn test_user_requires_id_or_username() {
        assert!(Cli::try_parse_from(["twitter154", "user"]).is_err());
        assert!(Cli::try_parse_from(["twitter154", "user", "--id", "1", "--username", "x"]).is_err());

        let cli = Cli::try_parse_from(["twitter154", "user", "--username", "nasa"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::User {
                id: None,
                username: Some("nasa".to_string())
            }
        );
    }
}
