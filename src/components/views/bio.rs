use crate::config::CardConfig;
use dioxus::prelude::*;

/// Index of the portrait shown after `current` is clicked.
pub fn next_image_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

#[component]
pub fn BioPanel() -> Element {
    let config = use_context::<CardConfig>();
    let mut image_index = use_signal(|| 0usize);

    let profile = config.profile;
    let image_count = profile.bio_images.len();
    let image = profile
        .bio_images
        .get(image_index())
        .cloned()
        .unwrap_or_default();
    let artist = profile.artist.clone();

    rsx! {
        div { class: "w-full flex flex-col sm:flex-row sm:gap-10 pt-0 pb-4 px-0",
            h2 { class: "text-[24px] font-bold mb-4 mt-0 sm:hidden", "{artist}" }
            if !image.is_empty() {
                div { class: "w-full mb-4 flex justify-center sm:w-[30%] sm:min-w-[250px] sm:max-w-[350px] sm:mb-0 sm:justify-start sm:flex-shrink-0",
                    img {
                        src: "{image}",
                        alt: "Bio",
                        class: "w-2/3 max-w-[200px] sm:w-full sm:h-auto sm:max-w-none sm:aspect-[3/4] object-cover rounded-lg cursor-pointer",
                        onclick: move |_| image_index.set(next_image_index(image_index(), image_count)),
                    }
                }
            }
            div { class: "w-full sm:flex-1 sm:min-w-0 flex flex-col",
                h2 { class: "hidden sm:block text-[42px] font-bold mb-4 mt-0", "{artist}" }
                div { class: "text-gray-600 text-base sm:text-[18px] sm:leading-[1.6] mb-4 sm:mb-5",
                    p { class: "mb-1 italic", "{profile.tagline}" }
                    p { class: "mb-1",
                        span { class: "font-medium", "Genre(s):" }
                        " {profile.genres}"
                    }
                    p { class: "mb-0",
                        span { class: "font-medium", "Location:" }
                        " {profile.location}"
                    }
                }
                hr { class: "border-gray-300 mb-4 sm:mb-5" }
                div { class: "text-black text-lg sm:text-[22px] sm:leading-[1.6] font-medium",
                    for paragraph in profile.bio_paragraphs.iter() {
                        p { class: "mb-3 sm:mb-5", "{paragraph}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_cycles_and_wraps() {
        assert_eq!(next_image_index(0, 2), 1);
        assert_eq!(next_image_index(1, 2), 0);
        assert_eq!(next_image_index(0, 1), 0);
        assert_eq!(next_image_index(3, 0), 0);
    }
}
