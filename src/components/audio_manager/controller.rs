// Dioxus glue: owns the transport for one card and mirrors its readouts into signals.
use super::{open_platform_backend, AudioTransport, PlatformBackend};
use dioxus::prelude::*;
use std::rc::Rc;

const POLL_INTERVAL_MS: u32 = 200;

/// Playback readouts that persist across renders.
#[derive(Clone, Copy, PartialEq)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub is_playing: Signal<bool>,
    pub playback_error: Signal<Option<String>>,
}

#[derive(Clone)]
pub struct AudioHandle {
    transport: Rc<AudioTransport<PlatformBackend>>,
    pub state: AudioState,
}

impl AudioHandle {
    pub fn is_available(&self) -> bool {
        self.transport.is_available()
    }

    pub fn play(&self) {
        let transport = self.transport.clone();
        let mut is_playing = self.state.is_playing;
        spawn(async move {
            if transport.play().await {
                is_playing.set(true);
            }
        });
    }

    pub fn pause(&self) {
        self.transport.pause();
        let mut is_playing = self.state.is_playing;
        is_playing.set(false);
    }

    pub fn stop(&self) {
        self.transport.stop();
        let mut state = self.state;
        state.current_time.set(0.0);
        state.is_playing.set(false);
    }

    /// Seek from a slider position in percent.
    pub fn seek_percent(&self, percent: f64) {
        if let Some(position) = self.transport.seek_to_fraction(percent / 100.0) {
            let mut current_time = self.state.current_time;
            current_time.set(position);
        }
    }
}

/// Open `url` once for this component and keep its readouts in sync.
pub fn use_audio(url: String) -> AudioHandle {
    let state = AudioState {
        current_time: use_signal(|| 0.0),
        duration: use_signal(|| 0.0),
        is_playing: use_signal(|| false),
        playback_error: use_signal(|| None),
    };
    let transport = use_hook(move || Rc::new(AudioTransport::new(open_platform_backend(&url))));

    {
        let transport = transport.clone();
        use_future(move || {
            let transport = transport.clone();
            async move {
                if !transport.is_available() {
                    return;
                }
                let mut state = state;
                loop {
                    sleep_ms(POLL_INTERVAL_MS).await;

                    let snapshot = transport.snapshot();
                    if snapshot.ended {
                        if *state.current_time.peek() != 0.0 {
                            state.current_time.set(0.0);
                        }
                        if *state.is_playing.peek() {
                            state.is_playing.set(false);
                        }
                    } else {
                        if (*state.current_time.peek() - snapshot.current_time).abs() >= 0.2 {
                            state.current_time.set(snapshot.current_time);
                        }
                        // Keep the flag honest when playback is paused from outside the card.
                        if *state.is_playing.peek() == snapshot.paused {
                            state.is_playing.set(!snapshot.paused);
                        }
                    }
                    if (*state.duration.peek() - snapshot.duration).abs() > 0.5 {
                        state.duration.set(snapshot.duration);
                    }

                    let error = transport.error();
                    if *state.playback_error.peek() != error {
                        if let Some(message) = &error {
                            tracing::warn!("audio could not be loaded: {message}");
                            state.duration.set(0.0);
                        }
                        state.playback_error.set(error);
                    }
                }
            }
        });
    }

    {
        let transport = transport.clone();
        use_drop(move || transport.pause());
    }

    AudioHandle { transport, state }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(_millis: u32) {
    // Native builds never poll: their transport has no backend.
    std::future::pending::<()>().await
}
