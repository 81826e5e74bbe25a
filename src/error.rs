//! Error type shared by the card's resource plumbing.
//!
//! None of these ever reach the user as a failure: components log them and
//! fall back to disabled controls or placeholder text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("no audio resource is loaded")]
    AudioUnavailable,

    #[error("playback was rejected by the host: {0}")]
    PlaybackRejected(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetching {url} returned status {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("invalid card configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl CardError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_status_message_names_url_and_status() {
        let err = CardError::FetchStatus {
            url: "/file/lyrics/a.txt".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fetching /file/lyrics/a.txt returned status 404"
        );
    }

    #[test]
    fn config_errors_convert_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CardError = parse.into();
        assert!(matches!(err, CardError::Config(_)));
    }
}
