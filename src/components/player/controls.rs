use crate::components::{AudioHandle, Icon};
use dioxus::prelude::*;

const CONTROL_CLASS: &str = "p-2 hover:bg-black/5 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

/// Play button - asks the host to start playback
#[component]
pub(super) fn PlayButton() -> Element {
    let audio = use_context::<AudioHandle>();
    let available = audio.is_available();

    rsx! {
        button {
            id: "play-btn",
            r#type: "button",
            aria_label: "Play",
            disabled: !available,
            class: CONTROL_CLASS,
            onclick: move |_| audio.play(),
            Icon { name: "play".to_string(), class: "w-6 h-6 text-black".to_string() }
        }
    }
}

#[component]
pub(super) fn PauseButton() -> Element {
    let audio = use_context::<AudioHandle>();
    let available = audio.is_available();

    rsx! {
        button {
            id: "pause-btn",
            r#type: "button",
            aria_label: "Pause",
            disabled: !available,
            class: CONTROL_CLASS,
            onclick: move |_| audio.pause(),
            Icon { name: "pause".to_string(), class: "w-6 h-6 text-black".to_string() }
        }
    }
}

/// Stop button - pause and rewind to the start
#[component]
pub(super) fn StopButton() -> Element {
    let audio = use_context::<AudioHandle>();
    let available = audio.is_available();

    rsx! {
        button {
            id: "stop-btn",
            r#type: "button",
            aria_label: "Stop",
            disabled: !available,
            class: CONTROL_CLASS,
            onclick: move |_| audio.stop(),
            Icon { name: "stop".to_string(), class: "w-6 h-6 text-black".to_string() }
        }
    }
}
