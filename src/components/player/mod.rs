use crate::components::{progress_percent, use_audio};
use crate::config::CardConfig;
use crate::utils::format_time;
use dioxus::prelude::*;

mod controls;

use controls::{PauseButton, PlayButton, StopButton};

/// Track title, artist, seek slider and transport buttons.
#[component]
pub fn Player() -> Element {
    let config = use_context::<CardConfig>();
    let audio = use_audio(config.resolve_url(&config.profile.audio_url));
    use_context_provider(|| audio.clone());

    let current_time = (audio.state.current_time)();
    let duration = (audio.state.duration)();
    let playback_error = (audio.state.playback_error)();
    let progress = progress_percent(current_time, duration);
    let seek_disabled = !audio.is_available() || duration <= 0.0;

    let on_seek_input = {
        let audio = audio.clone();
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                audio.seek_percent(percent.clamp(0.0, 100.0));
            }
        }
    };

    let elapsed_label = format_time(current_time);
    let duration_label = format_time(duration);
    let title = config.profile.title.clone();
    let artist = config.profile.artist.clone();

    rsx! {
        div { class: "relative shrink-0 w-full", "data-name": "hero",
            div { class: "flex flex-col items-start justify-start text-black text-left w-full",
                p { class: "block leading-[54px] text-[30px] font-bold", "{title}" }
                p { class: "block text-[24px] font-medium mb-8", "{artist}" }

                div { class: "w-full mb-2",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{progress}",
                        disabled: seek_disabled,
                        class: "card-slider w-full h-1 rounded-lg appearance-none cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed",
                        style: "background: linear-gradient(to right, #000 0%, #000 {progress}%, rgba(0,0,0,0.2) {progress}%, rgba(0,0,0,0.2) 100%);",
                        oninput: on_seek_input,
                    }
                    div { class: "flex justify-between mt-1",
                        span { class: "text-xs text-black/70", "{elapsed_label}" }
                        span { class: "text-xs text-black/70", "{duration_label}" }
                    }
                    if let Some(message) = playback_error {
                        p { class: "text-xs text-black/60 mt-1", "{message}" }
                    }
                }

                div { class: "flex flex-row items-center justify-center gap-2 w-full mt-1",
                    PlayButton {}
                    PauseButton {}
                    StopButton {}
                }
            }
        }
    }
}
