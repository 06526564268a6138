use thiserror::Error;

use telegram_client::TelegramError;

pub type Result<T> = std::result::Result<T, WatchError>;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl WatchError {
    /// Only configuration errors abort the process; everything else ends the current cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, WatchError::Config(_))
    }
}

impl From<reqwest::Error> for WatchError {
    fn from(err: reqwest::Error) -> Self {
        WatchError::Network(err.to_string())
    }
}

impl From<TelegramError> for WatchError {
    fn from(err: TelegramError) -> Self {
        WatchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_errors_are_fatal() {
        assert!(WatchError::Config("TELEGRAM_KEY".into()).is_fatal());
        assert!(!WatchError::Network("timeout".into()).is_fatal());
        assert!(!WatchError::Parse("no numbers".into()).is_fatal());
        assert!(!WatchError::Persistence("read-only".into()).is_fatal());
    }

    #[test]
    fn telegram_errors_map_to_network() {
        let err: WatchError = TelegramError::Api {
            status: 401,
            message: "Unauthorized".into(),
        }
        .into();
        assert!(matches!(err, WatchError::Network(ref m) if m.contains("401")));
    }
}
