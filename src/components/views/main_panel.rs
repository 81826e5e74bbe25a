use crate::components::{CoverArt, Player};
use dioxus::prelude::*;

#[component]
pub fn MainPanel() -> Element {
    rsx! {
        div { class: "flex flex-col gap-2 items-start justify-center px-[18px] pt-[18px] pb-[4px] relative",
            CoverArt {}
            div { class: "relative shrink-0 w-full py-[9px]", "data-name": "legend", Player {} }
        }
    }
}
