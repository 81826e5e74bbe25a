//! Audio Manager - wraps the card's single audio resource.
//! Playback failures are logged and absorbed; callers never see an error.

use crate::error::CardError;
use futures_util::future::LocalBoxFuture;
use tracing::warn;

mod controller;
#[cfg(target_arch = "wasm32")]
mod web_backend;

pub use controller::*;
#[cfg(target_arch = "wasm32")]
pub use web_backend::WebAudioBackend;

/// The host media element the transport drives.
pub trait MediaBackend {
    /// Ask the host to start playback. Resolves once the host accepts or rejects.
    fn play(&self) -> LocalBoxFuture<'static, Result<(), CardError>>;
    fn pause(&self);
    fn set_current_time(&self, seconds: f64);
    fn current_time(&self) -> f64;
    /// Raw duration; may be NaN or infinite before metadata loads.
    fn duration(&self) -> f64;
    fn paused(&self) -> bool;
    fn ended(&self) -> bool;
    /// Host-reported load error, if any.
    fn error(&self) -> Option<String> {
        None
    }
}

/// Backend for targets without a browser media element.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {}

#[cfg(not(target_arch = "wasm32"))]
impl MediaBackend for Unavailable {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), CardError>> {
        match *self {}
    }
    fn pause(&self) {
        match *self {}
    }
    fn set_current_time(&self, _seconds: f64) {
        match *self {}
    }
    fn current_time(&self) -> f64 {
        match *self {}
    }
    fn duration(&self) -> f64 {
        match *self {}
    }
    fn paused(&self) -> bool {
        match *self {}
    }
    fn ended(&self) -> bool {
        match *self {}
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformBackend = WebAudioBackend;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformBackend = Unavailable;

/// Open the audio resource at `url` on the current platform.
#[cfg(target_arch = "wasm32")]
pub fn open_platform_backend(url: &str) -> Option<PlatformBackend> {
    match WebAudioBackend::open(url) {
        Ok(backend) => Some(backend),
        Err(err) => {
            warn!("failed to create audio element: {err}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_backend(url: &str) -> Option<PlatformBackend> {
    warn!("audio playback is not available on this platform ({url})");
    None
}

/// Point-in-time readout of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransportSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub ended: bool,
}

pub struct AudioTransport<B> {
    backend: Option<B>,
}

impl<B: MediaBackend> AudioTransport<B> {
    pub fn new(backend: Option<B>) -> Self {
        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&B, CardError> {
        self.backend.as_ref().ok_or(CardError::AudioUnavailable)
    }

    async fn try_play(&self) -> Result<(), CardError> {
        let request = self.backend()?.play();
        request.await
    }

    /// Start playback. Returns whether the host accepted the request.
    pub async fn play(&self) -> bool {
        match self.try_play().await {
            Ok(()) => true,
            Err(CardError::PlaybackRejected(reason)) if reason.starts_with("NotAllowedError") => {
                warn!("autoplay blocked, user interaction required: {reason}");
                false
            }
            Err(err) => {
                warn!("play failed: {err}");
                false
            }
        }
    }

    pub fn pause(&self) {
        if let Some(backend) = &self.backend {
            backend.pause();
        }
    }

    /// Pause and rewind to the beginning.
    pub fn stop(&self) {
        if let Some(backend) = &self.backend {
            backend.pause();
            backend.set_current_time(0.0);
        }
    }

    /// Seek to `fraction` of the track. Returns the new position in seconds,
    /// or `None` while there is nothing to seek in.
    pub fn seek_to_fraction(&self, fraction: f64) -> Option<f64> {
        let backend = self.backend.as_ref()?;
        let duration = normalize_duration(backend.duration());
        if duration <= 0.0 || !fraction.is_finite() {
            return None;
        }
        let position = fraction.clamp(0.0, 1.0) * duration;
        backend.set_current_time(position);
        Some(position)
    }

    pub fn current_time(&self) -> f64 {
        self.backend
            .as_ref()
            .map(|backend| backend.current_time())
            .filter(|time| time.is_finite())
            .unwrap_or(0.0)
    }

    pub fn duration(&self) -> f64 {
        self.backend
            .as_ref()
            .map(|backend| normalize_duration(backend.duration()))
            .unwrap_or(0.0)
    }

    pub fn error(&self) -> Option<String> {
        self.backend.as_ref().and_then(|backend| backend.error())
    }

    pub fn snapshot(&self) -> TransportSnapshot {
        match &self.backend {
            Some(backend) => TransportSnapshot {
                current_time: self.current_time(),
                duration: self.duration(),
                paused: backend.paused(),
                ended: backend.ended(),
            },
            None => TransportSnapshot {
                paused: true,
                ..TransportSnapshot::default()
            },
        }
    }
}

fn normalize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

/// Playback progress in percent, 0 while the duration is unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 && current_time.is_finite() {
        (current_time / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeBackend {
        time: Cell<f64>,
        duration: Cell<f64>,
        paused: Cell<bool>,
        reject_play: bool,
    }

    impl MediaBackend for FakeBackend {
        fn play(&self) -> LocalBoxFuture<'static, Result<(), CardError>> {
            let result = if self.reject_play {
                Err(CardError::PlaybackRejected("NotAllowedError".to_string()))
            } else {
                self.paused.set(false);
                Ok(())
            };
            async move { result }.boxed_local()
        }
        fn pause(&self) {
            self.paused.set(true);
        }
        fn set_current_time(&self, seconds: f64) {
            self.time.set(seconds);
        }
        fn current_time(&self) -> f64 {
            self.time.get()
        }
        fn duration(&self) -> f64 {
            self.duration.get()
        }
        fn paused(&self) -> bool {
            self.paused.get()
        }
        fn ended(&self) -> bool {
            false
        }
    }

    fn loaded(duration: f64) -> AudioTransport<FakeBackend> {
        let backend = FakeBackend {
            duration: Cell::new(duration),
            paused: Cell::new(true),
            ..FakeBackend::default()
        };
        AudioTransport::new(Some(backend))
    }

    #[tokio::test]
    async fn play_reports_acceptance() {
        let transport = loaded(200.0);
        assert!(transport.play().await);
        assert!(!transport.snapshot().paused);
    }

    #[tokio::test]
    async fn rejected_play_leaves_state_unchanged() {
        let transport = AudioTransport::new(Some(FakeBackend {
            paused: Cell::new(true),
            reject_play: true,
            ..FakeBackend::default()
        }));
        assert!(!transport.play().await);
        assert!(transport.snapshot().paused);
    }

    #[tokio::test]
    async fn missing_resource_is_a_noop() {
        let transport: AudioTransport<FakeBackend> = AudioTransport::new(None);
        assert!(!transport.is_available());
        assert!(!transport.play().await);
        transport.pause();
        transport.stop();
        assert_eq!(transport.seek_to_fraction(0.5), None);
        assert_eq!(transport.current_time(), 0.0);
        assert_eq!(transport.duration(), 0.0);
        assert!(transport.snapshot().paused);
    }

    #[test]
    fn stop_pauses_and_rewinds() {
        let transport = loaded(200.0);
        transport.seek_to_fraction(0.5);
        transport.stop();
        let snapshot = transport.snapshot();
        assert!(snapshot.paused);
        assert_eq!(snapshot.current_time, 0.0);
    }

    #[test]
    fn seek_maps_fraction_through_duration() {
        let transport = loaded(240.0);
        assert_eq!(transport.seek_to_fraction(0.25), Some(60.0));
        assert_eq!(transport.current_time(), 60.0);
        assert_eq!(transport.seek_to_fraction(1.7), Some(240.0));
        assert_eq!(transport.seek_to_fraction(-1.0), Some(0.0));
    }

    #[test]
    fn seek_needs_a_known_duration() {
        assert_eq!(loaded(f64::NAN).seek_to_fraction(0.5), None);
        assert_eq!(loaded(f64::INFINITY).seek_to_fraction(0.5), None);
        assert_eq!(loaded(0.0).seek_to_fraction(0.5), None);
        assert_eq!(loaded(f64::NAN).duration(), 0.0);
    }

    #[test]
    fn progress_is_bounded() {
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
        assert_eq!(progress_percent(30.0, 0.0), 0.0);
        assert_eq!(progress_percent(500.0, 120.0), 100.0);
        assert_eq!(progress_percent(f64::NAN, 120.0), 0.0);
    }
}
