//! Card configuration: artist content, gesture tuning and telemetry switches.
//!
//! The configuration ships inside the binary as `assets/card.json`. Every
//! field is defaulted so a partial document still loads.

use crate::error::CardError;
use serde::{Deserialize, Serialize};
use tracing::warn;

const EMBEDDED_CONFIG: &str = include_str!("../assets/card.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardConfig {
    pub profile: ArtistProfile,
    pub gesture: GestureTuning,
    pub telemetry: TelemetrySettings,
    /// Base used to resolve relative resource URLs outside the browser.
    pub asset_base_url: Option<String>,
}

impl CardConfig {
    pub fn from_json(source: &str) -> Result<Self, CardError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load the embedded configuration, falling back to defaults when it is malformed.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                warn!("using default card configuration: {err}");
                Self::default()
            }
        }
    }

    /// Resolve a resource path against `asset_base_url`.
    /// Absolute URLs and paths without a configured base pass through unchanged.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match self.asset_base_url.as_deref() {
            Some(base) if !base.trim().is_empty() => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            _ => path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArtistProfile {
    pub title: String,
    pub artist: String,
    pub cover_image: String,
    pub audio_url: String,
    pub lyrics_url: String,
    pub tagline: String,
    pub genres: String,
    pub location: String,
    pub bio_paragraphs: Vec<String>,
    pub bio_images: Vec<String>,
    pub downloads: Vec<DownloadLink>,
    pub contact: String,
    pub discography: Vec<Release>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DownloadLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Release {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub image: String,
    #[serde(default)]
    pub link: String,
}

/// Thresholds used by the gesture interpreter, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    /// Vertical travel must exceed horizontal travel times this ratio to count as scrolling.
    pub scroll_ratio: f64,
    pub scroll_min_px: f64,
    /// Horizontal travel must exceed vertical travel times this ratio to count as a swipe.
    pub swipe_ratio: f64,
    pub swipe_min_px: f64,
    pub max_offset_px: f64,
    pub commit_distance_px: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            scroll_ratio: 1.5,
            scroll_min_px: 10.0,
            swipe_ratio: 1.5,
            swipe_min_px: 15.0,
            max_offset_px: 100.0,
            commit_distance_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    pub enabled: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
