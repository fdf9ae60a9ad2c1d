//! Application configuration

pub mod replies;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::site::Language;

pub use replies::{ReplyBook, ReplyBookError};

/// Delay before the assistant's reply is appended
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub reply_delay_ms: u64,
    pub replies_path: Option<PathBuf>,
    pub language: Language,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let language = match env::var("CONCIERGE_LANGUAGE") {
            Ok(code) => code.parse()?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            reply_delay_ms: env::var("CONCIERGE_REPLY_DELAY_MS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(DEFAULT_REPLY_DELAY_MS),
            replies_path: env::var("CONCIERGE_REPLIES").ok().map(PathBuf::from),
            language,
        })
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Load the configured reply book, falling back to the built-in one
    pub async fn reply_book(&self) -> Result<ReplyBook, ReplyBookError> {
        match &self.replies_path {
            Some(path) => ReplyBook::from_file(path).await,
            None => Ok(ReplyBook::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            replies_path: None,
            language: Language::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        let config = Config::default();
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.language, Language::En);
    }

    #[tokio::test]
    async fn test_builtin_book_without_path() {
        let book = Config::default().reply_book().await.unwrap();
        assert_eq!(book, ReplyBook::builtin());
    }
}
