// Browser media backend built on a detached `HtmlAudioElement`.
use super::MediaBackend;
use crate::error::CardError;
use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Clone)]
pub struct WebAudioBackend {
    audio: HtmlAudioElement,
}

impl WebAudioBackend {
    pub fn open(url: &str) -> Result<Self, CardError> {
        let audio = HtmlAudioElement::new_with_src(url)
            .map_err(|err| CardError::fetch(url, js_error_label(&err)))?;
        audio.set_preload("auto");
        audio.load();
        Ok(Self { audio })
    }
}

impl MediaBackend for WebAudioBackend {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), CardError>> {
        let promise = self.audio.play();
        async move {
            let promise =
                promise.map_err(|err| CardError::PlaybackRejected(js_error_label(&err)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| CardError::PlaybackRejected(js_error_label(&err)))
        }
        .boxed_local()
    }

    fn pause(&self) {
        if let Err(err) = self.audio.pause() {
            tracing::warn!("pause failed: {}", js_error_label(&err));
        }
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn ended(&self) -> bool {
        self.audio.ended()
    }

    fn error(&self) -> Option<String> {
        let error = self.audio.error()?;
        Some(match error.code() {
            1 => "Playback was aborted before the audio loaded.".to_string(),
            2 => "Network error while loading the audio.".to_string(),
            3 => "Audio playback failed due to a decode error.".to_string(),
            4 => "No supported audio source was found.".to_string(),
            _ => "Unable to load the audio.".to_string(),
        })
    }
}

/// Best-effort name for a rejected promise or thrown value, e.g. `NotAllowedError`.
fn js_error_label(value: &JsValue) -> String {
    let name = js_sys::Reflect::get(value, &"name".into())
        .ok()
        .and_then(|name| name.as_string());
    let message = js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string());
    match (name, message) {
        (Some(name), Some(message)) if !message.is_empty() => format!("{name}: {message}"),
        (Some(name), _) => name,
        (None, Some(message)) => message,
        (None, None) => format!("{value:?}"),
    }
}
