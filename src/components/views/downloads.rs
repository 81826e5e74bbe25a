use crate::config::CardConfig;
use dioxus::prelude::*;

#[component]
pub fn DownloadsPanel() -> Element {
    let config = use_context::<CardConfig>();
    let profile = config.profile;

    rsx! {
        div { class: "w-full flex flex-col pt-0 pb-6 sm:pb-8 px-0",
            h2 { class: "text-[24px] sm:text-[31px] font-bold mb-4 sm:mb-5 mt-0", "Downloads" }
            div { class: "text-black text-lg sm:text-[23px] sm:leading-[1.6] leading-relaxed",
                for link in profile.downloads.iter() {
                    p { class: "mb-3 sm:mb-4",
                        a {
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "underline hover:text-gray-600 transition-colors",
                            "{link.label}"
                        }
                    }
                }
                if !profile.contact.is_empty() {
                    p { class: "mb-0", "{profile.contact}" }
                }
            }
        }
    }
}
