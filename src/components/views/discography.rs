use crate::components::{CardController, Icon, Panel};
use crate::config::CardConfig;
use dioxus::prelude::*;

#[component]
pub fn DiscographyPanel() -> Element {
    let config = use_context::<CardConfig>();
    let controller = use_context::<CardController>();
    let releases = config.profile.discography;

    rsx! {
        div { class: "w-full flex flex-col",
            div { class: "flex items-center justify-center gap-3 mb-4 mt-0 relative",
                h2 { class: "text-[24px]", "Discography" }
                button {
                    r#type: "button",
                    aria_label: "Back to main",
                    class: "absolute right-0 p-2 hover:bg-black/5 rounded-lg transition-colors",
                    onclick: move |_| controller.select_panel(Panel::Main),
                    Icon { name: "arrow-left".to_string(), class: "w-5 h-5 text-black".to_string() }
                }
            }
            div { class: "flex-1 overflow-y-auto min-h-0",
                div { class: "grid grid-cols-2 gap-3",
                    for release in releases {
                        a {
                            key: "{release.id}",
                            href: "{release.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "release-tile overflow-hidden block",
                            div { class: "flex flex-col p-2",
                                img {
                                    src: "{release.image}",
                                    alt: "{release.title}",
                                    class: "w-full aspect-square object-cover mb-2",
                                    loading: "lazy",
                                }
                                div { class: "flex flex-col",
                                    p { class: "text-[14px] font-medium", "{release.title}" }
                                    p { class: "text-[11px] text-black/70", "{release.subtitle}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
