use crate::api::{fetch_text, LyricsText};
use crate::config::CardConfig;
use dioxus::prelude::*;

/// Which face of the cover panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverFace {
    #[default]
    Image,
    Lyrics,
}

impl CoverFace {
    pub fn toggled(self) -> Self {
        match self {
            Self::Image => Self::Lyrics,
            Self::Lyrics => Self::Image,
        }
    }
}

/// Square cover art that flips to the song's lyrics on click.
#[component]
pub fn CoverArt() -> Element {
    let config = use_context::<CardConfig>();
    let mut face = use_signal(CoverFace::default);
    let mut image_failed = use_signal(|| false);

    // Fetched once on mount so the text is usually ready before the first flip.
    let lyrics_url = config.resolve_url(&config.profile.lyrics_url);
    let lyrics = use_resource(move || {
        let url = lyrics_url.clone();
        async move { LyricsText::from_result(fetch_text(&url).await) }
    });
    let lyrics_body = lyrics().unwrap_or_default().display().to_string();

    let cover = config.profile.cover_image.clone();
    let title = config.profile.title.clone();

    rsx! {
        div {
            class: "cover-art relative shrink-0 aspect-square w-full overflow-hidden cursor-pointer",
            "data-name": "cover",
            onclick: move |_| face.set(face().toggled()),
            {
                match face() {
                    CoverFace::Image => rsx! {
                        if !image_failed() {
                            img {
                                src: "{cover}",
                                alt: "{title}",
                                class: "w-full h-full object-cover",
                                onerror: move |_| {
                                    tracing::warn!("cover image failed to load");
                                    image_failed.set(true);
                                },
                            }
                        }
                    },
                    CoverFace::Lyrics => rsx! {
                        div {
                            class: "lyrics-sheet absolute inset-0 p-6 overflow-y-auto pointer-events-auto",
                            // Lyrics scroll on their own; touches must not reach the card swipe.
                            ontouchstart: move |e: TouchEvent| e.stop_propagation(),
                            ontouchmove: move |e: TouchEvent| e.stop_propagation(),
                            ontouchend: move |e: TouchEvent| e.stop_propagation(),
                            div { class: "text-black whitespace-pre-line text-base sm:text-lg leading-relaxed",
                                "{lyrics_body}"
                            }
                        }
                    },
                }
            }
        }
    }
}
