use crate::components::views::PanelBody;
use crate::components::{use_card_controller, use_is_mobile, CardController, Panel, PANELS};
use crate::config::CardConfig;
use dioxus::prelude::*;
use std::rc::Rc;

const TAB_ACTIVE: &str = "bg-gray-700 text-white";
const TAB_IDLE: &str = "bg-gray-300 text-gray-700 hover:bg-gray-400";

/// Inner padding and scrolling of a panel's content area.
fn content_class(panel: Panel) -> &'static str {
    match panel {
        Panel::Main => "flex flex-col justify-start overflow-clip relative w-full",
        Panel::Bio => "flex flex-col items-start justify-start px-[18px] pt-[18px] pb-[18px] sm:px-[50px] sm:pt-[40px] sm:pb-[50px] h-full min-h-0 overflow-y-auto",
        Panel::Info => "flex flex-col items-start justify-start px-[18px] pt-[18px] pb-[18px] sm:px-[24px] sm:pt-[24px] sm:pb-[24px] overflow-y-auto h-full min-h-0",
        Panel::Discography => "flex flex-col items-start justify-start px-[18px] pt-[18px] pb-[18px] w-full h-full overflow-y-auto min-h-0",
    }
}

/// Bio and info panels borrow the main panel's height on phones.
fn matches_main_height(panel: Panel) -> bool {
    matches!(panel, Panel::Bio | Panel::Info)
}

/// Main is measured whenever it is the visible panel, so the height tracks
/// content that changed while another panel was shown.
fn measures_height(panel: Panel, active: Panel) -> bool {
    panel == Panel::Main && active == Panel::Main
}

fn first_touch(evt: &TouchEvent) -> Option<(f64, f64)> {
    evt.touches().first().map(|touch| {
        let point = touch.client_coordinates();
        (point.x, point.y)
    })
}

/// The swipeable artist card: tab row plus four stacked panels.
#[component]
pub fn LandingCard() -> Element {
    let config = use_context::<CardConfig>();
    let controller = use_card_controller(&config);
    let is_mobile = use_is_mobile();
    let mut main_height = use_signal(|| None::<f64>);

    let active = controller.active();
    let mobile = is_mobile();
    let wide_bio = active == Panel::Bio && !mobile;
    let frame_class = format!(
        "relative w-full bg-[var(--cream-background)] {} {}",
        if wide_bio { "rounded-lg" } else { "" },
        if wide_bio { "" } else { "overflow-hidden" },
    );
    let frame_style = if mobile { "max-height: 85vh;" } else { "max-height: none;" };
    let container_class = format!(
        "relative w-full transition-all duration-300 {}",
        active.container_class()
    );

    rsx! {
        div { class: "{container_class}",
            div { class: "flex flex-row gap-2 mb-3 justify-center",
                for panel in PANELS {
                    TabButton {
                        key: "{panel}",
                        panel,
                        selected: panel == active,
                    }
                }
            }
            div { class: "{frame_class}", style: frame_style,
                for panel in PANELS {
                    PanelFrame {
                        key: "{panel}",
                        panel,
                        mobile,
                        main_height: main_height(),
                        on_main_measured: move |height| main_height.set(Some(height)),
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(panel: Panel, selected: bool) -> Element {
    let controller = use_context::<CardController>();
    let label = panel.tab_label();
    let class = format!(
        "px-3 py-1.5 text-xs sm:text-sm font-medium transition-colors {}",
        if selected { TAB_ACTIVE } else { TAB_IDLE }
    );
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |_| controller.select_panel(panel),
            "{label}"
        }
    }
}

#[component]
fn PanelFrame(
    panel: Panel,
    mobile: bool,
    main_height: Option<f64>,
    on_main_measured: EventHandler<f64>,
) -> Element {
    let controller = use_context::<CardController>();
    let visual = controller.visual(panel);
    let placement = if visual.interactive {
        "relative pointer-events-auto"
    } else {
        "absolute top-0 left-0 w-full pointer-events-none"
    };
    let class = format!(
        "bg-[var(--cream-background)] overflow-hidden transition-all duration-300 ease-out {placement}"
    );

    let mut style = visual.style();
    if mobile && matches_main_height(panel) {
        if let Some(height) = main_height {
            style.push_str(&format!(" height: {height}px;"));
        }
    }
    let body_style = if mobile || panel != Panel::Bio { "max-height: 85vh;" } else { "" };

    let on_start = {
        let controller = controller.clone();
        move |evt: TouchEvent| {
            if let Some((x, y)) = first_touch(&evt) {
                controller.touch_start(x, y);
            }
        }
    };
    let on_move = {
        let controller = controller.clone();
        move |evt: TouchEvent| {
            if let Some((x, y)) = first_touch(&evt) {
                controller.touch_move(x, y);
            }
        }
    };
    let on_end = {
        let controller = controller.clone();
        move |_: TouchEvent| controller.touch_end()
    };
    let on_cancel = {
        let controller = controller.clone();
        move |_: TouchEvent| controller.touch_cancel()
    };

    let mut element = use_signal(|| None::<Rc<MountedData>>);
    use_effect(move || {
        let Some(node) = element() else {
            return;
        };
        if !measures_height(panel, controller.active()) {
            return;
        }
        spawn(async move {
            match node.get_client_rect().await {
                Ok(rect) => on_main_measured.call(rect.height()),
                Err(err) => tracing::debug!("main panel measurement failed: {err:?}"),
            }
        });
    });
    let on_mounted = move |evt: MountedEvent| element.set(Some(evt.data()));

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            "data-panel": panel.key(),
            ontouchstart: on_start,
            ontouchmove: on_move,
            ontouchend: on_end,
            ontouchcancel: on_cancel,
            onmounted: on_mounted,
            div { class: "flex flex-col relative w-full", style: body_style,
                div { class: content_class(panel), PanelBody { panel } }
            }
        }
    }
}
