use crate::error::CardError;
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
use tracing::warn;

#[cfg(not(target_arch = "wasm32"))]
static TEXT_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const LYRICS_PLACEHOLDER: &str = "Loading lyrics...";
pub const LYRICS_FALLBACK: &str = "Lyrics are unavailable right now.";

/// Fetch a plain-text resource.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(url: &str) -> Result<String, CardError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| CardError::fetch(url, err))?;
    if !response.ok() {
        return Err(CardError::FetchStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.text().await.map_err(|err| CardError::fetch(url, err))
}

/// Fetch a plain-text resource.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(url: &str) -> Result<String, CardError> {
    let response = TEXT_HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|err| CardError::fetch(url, err))?;
    if !response.status().is_success() {
        return Err(CardError::FetchStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().await.map_err(|err| CardError::fetch(url, err))
}

/// Load state of the lyrics text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LyricsText {
    #[default]
    Pending,
    Loaded(String),
    Failed,
}

impl LyricsText {
    pub fn from_result(result: Result<String, CardError>) -> Self {
        match result {
            Ok(text) if !text.trim().is_empty() => Self::Loaded(text),
            Ok(_) => {
                warn!("lyrics resource was empty");
                Self::Failed
            }
            Err(err) => {
                warn!("failed to load lyrics: {err}");
                Self::Failed
            }
        }
    }

    /// Text to show in the lyrics view.
    pub fn display(&self) -> &str {
        match self {
            Self::Pending => LYRICS_PLACEHOLDER,
            Self::Loaded(text) => text,
            Self::Failed => LYRICS_FALLBACK,
        }
    }
}
