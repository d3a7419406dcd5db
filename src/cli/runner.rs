//! CLI runner - executes commands

use crate::api::{Client, TweetsOptions};
use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.settings()?.into_builder()?.build()?);
        debug!(host = client.config().host(), "Client ready");

        match &self.cli.command {
            Commands::Username { user_id } => self.emit(&client.get_username(user_id).await?),
            Commands::User { id, username } => {
                let user = match (id, username) {
                    (Some(id), _) => client.get_user(id).await?,
                    (None, Some(username)) => client.get_user_by_username(username).await?,
                    (None, None) => return Err(Error::config("expected --id or --username")),
                };
                self.emit(&user)
            }
            Commands::Tweets {
                user_id,
                include_replies,
                include_pinned,
            } => {
                let options = TweetsOptions {
                    include_replies: *include_replies,
                    include_pinned: *include_pinned,
                };
                let tweets = client.get_user_tweets(user_id, options).await?;
                info!(count = tweets.len(), "Fetched tweets");
                self.emit(&tweets)
            }
            Commands::Following { user_id } => {
                let users = client.get_user_following(user_id).await?;
                info!(count = users.len(), "Fetched following");
                self.emit(&users)
            }
            Commands::Followers { user_id } => {
                let users = client.get_user_followers(user_id).await?;
                info!(count = users.len(), "Fetched followers");
                self.emit(&users)
            }
            Commands::Tweet { tweet_id } => self.emit(&client.get_tweet_details(tweet_id).await?),
            Commands::Replies { tweet_id } => {
                let tweets = client.get_tweet_replies(tweet_id).await?;
                info!(count = tweets.len(), "Fetched replies");
                self.emit(&tweets)
            }
            Commands::Favoriters { tweet_id } => {
                let users = client.get_tweet_user_favorites(tweet_id).await?;
                info!(count = users.len(), "Fetched favoriters");
                self.emit(&users)
            }
        }
    }

    /// Merge settings: file, then environment, then flags
    pub fn settings(&self) -> Result<Settings> {
        self.settings_with_env(|key| std::env::var(key).ok())
    }

    fn settings_with_env(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<Settings> {
        let mut settings = match &self.cli.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        }
        .with_env_from(lookup);

        if let Some(key) = &self.cli.api_key {
            settings.api_key = Some(key.clone());
        }
        if let Some(host) = &self.cli.host {
            settings.host = Some(host.clone());
        }
        if let Some(rate) = self.cli.rate {
            settings.requests_per_second = Some(rate);
        }
        Ok(settings)
    }

    fn emit<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.cli.pretty {
            serde_json::to_string_pretty(value).map_err(Error::Serialize)
        } else {
            serde_json::to_string(value).map_err(Error::Serialize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["twitter154"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_settings_from_flags() {
        let runner = runner(&[
            "--api-key", "k", "--host", "localhost:1", "--rate", "3", "tweet", "1",
        ]);
        let settings = runner.settings_with_env(no_env).unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert_eq!(settings.host.as_deref(), Some("localhost:1"));
        assert_eq!(settings.requests_per_second, Some(3));
    }

    #[test]
    fn test_flags_override_file_and_env() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key: from-file\nhost: file.example.com\nrequests_per_second: 9"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let runner = runner(&["-C", &path, "--rate", "2", "tweet", "1"]);
        let settings = runner
            .settings_with_env(|key| {
                (key == crate::config::ENV_HOST).then(|| "env.example.com".to_string())
            })
            .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.host.as_deref(), Some("env.example.com"));
        assert_eq!(settings.requests_per_second, Some(2));
    }

    #[test]
    fn test_missing_settings_file() {
        let runner = runner(&["-C", "/nonexistent/twitter154.yaml", "tweet", "1"]);
        assert!(runner.settings_with_env(no_env).is_err());
    }

    #[test]
    fn test_render_plain_and_pretty() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(runner(&["tweet", "1"]).render(&value).unwrap(), r#"{"a":1}"#);
        assert_eq!(
            runner(&["--pretty", "tweet", "1"]).render(&value).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }
}
