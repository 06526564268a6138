use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, WatchError};

/// Page carrying the running case and death totals.
pub const SOURCE_URL: &str = "https://bnonews.com/index.php/2020/02/the-latest-coronavirus-cases/";

/// Last notified snapshot, relative to the working directory.
pub const STATE_FILE: &str = "latestRecord";

pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration. Only the bot credential and channel come from
/// the environment; the rest are fixed but kept here so tests can swap them.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_key: String,
    pub telegram_channel: String,

    // Source
    pub source_url: String,
    pub request_timeout: Duration,

    // Scheduling
    pub poll_interval: Duration,

    // State
    pub state_path: PathBuf,

    /// Log messages instead of posting them.
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(
            required_env("TELEGRAM_KEY")?,
            required_env("TELEGRAM_CHANNEL")?,
        );
        config.dry_run = env::var("DRY_RUN")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        config.log_keys();
        Ok(config)
    }

    /// Config with the fixed defaults for everything but the credentials.
    pub fn new(telegram_key: String, telegram_channel: String) -> Self {
        Self {
            telegram_key,
            telegram_channel,
            source_url: SOURCE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            poll_interval: POLL_INTERVAL,
            state_path: PathBuf::from(STATE_FILE),
            dry_run: false,
        }
    }

    /// Chat id for the Bot API: the channel name with an `@` prefix.
    pub fn destination(&self) -> String {
        if self.telegram_channel.starts_with('@') {
            self.telegram_channel.clone()
        } else {
            format!("@{}", self.telegram_channel)
        }
    }

    fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  TELEGRAM_KEY: {}", preview(&self.telegram_key));
        tracing::info!("  TELEGRAM_CHANNEL: {}", self.destination());
        tracing::info!("  source: {}", self.source_url);
        tracing::info!("  state file: {}", self.state_path.display());
        if self.dry_run {
            tracing::info!("  DRY_RUN: messages will be logged, not sent");
        }
    }
}

fn preview(val: &str) -> String {
    let head: String = val.chars().take(5).collect();
    format!("{head}...({} chars)", val.chars().count())
}

fn required_env(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(WatchError::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_adds_at_prefix() {
        let config = Config::new("key".into(), "CoronavirusStatNews".into());
        assert_eq!(config.destination(), "@CoronavirusStatNews");
    }

    #[test]
    fn destination_keeps_existing_prefix() {
        let config = Config::new("key".into(), "@already".into());
        assert_eq!(config.destination(), "@already");
    }

    #[test]
    fn new_uses_fixed_defaults() {
        let config = Config::new("key".into(), "chan".into());
        assert_eq!(config.source_url, SOURCE_URL);
        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert_eq!(config.state_path, PathBuf::from("latestRecord"));
        assert!(!config.dry_run);
    }

    #[test]
    fn preview_shows_first_five_chars() {
        assert_eq!(preview("123456:ABCDEF"), "12345...(13 chars)");
        assert_eq!(preview("abc"), "abc...(3 chars)");
    }

    #[test]
    fn preview_handles_multibyte_keys() {
        assert_eq!(preview("ключ-секрет"), "ключ-...(11 chars)");
        assert_eq!(preview("🔑🔑🔑🔑🔑🔑"), "🔑🔑🔑🔑🔑...(6 chars)");
    }

    #[test]
    fn missing_variable_is_config_error() {
        let err = required_env("CASEWATCH_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("CASEWATCH_TEST_DEFINITELY_UNSET"));
    }
}
