use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod utils;

use components::LandingCard;
use config::CardConfig;

const CARD_CSS: Asset = asset!("/assets/styling/card.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(CardConfig::load);
    let title = format!("{} - {}", config.profile.artist, config.profile.title);

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "theme-color", content: "#f5f0e6" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: CARD_CSS }

        main { class: "card-page min-h-screen w-full flex items-start sm:items-center justify-center p-4",
            LandingCard {}
        }
    }
}
