//! Content producers for the four card panels.

mod bio;
mod discography;
mod downloads;
mod main_panel;

pub use bio::BioPanel;
pub use discography::DiscographyPanel;
pub use downloads::DownloadsPanel;
pub use main_panel::MainPanel;

use crate::components::Panel;
use dioxus::prelude::*;

/// Render the content of `panel`.
#[component]
pub fn PanelBody(panel: Panel) -> Element {
    match panel {
        Panel::Main => rsx! { MainPanel {} },
        Panel::Bio => rsx! { BioPanel {} },
        Panel::Info => rsx! { DownloadsPanel {} },
        Panel::Discography => rsx! { DiscographyPanel {} },
    }
}
