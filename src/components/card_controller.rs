use crate::components::navigation::{
    panel_visual, NavigationController, NavigationEvent, PanelVisual,
};
use crate::components::panel::Panel;
use crate::components::telemetry::default_sink;
use crate::config::CardConfig;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Render-facing snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    pub active: Panel,
    pub offset: f64,
}

impl Default for CardView {
    fn default() -> Self {
        Self {
            active: Panel::Main,
            offset: 0.0,
        }
    }
}

/// Handle shared through context by every part of one card instance.
#[derive(Clone)]
pub struct CardController {
    navigator: Rc<RefCell<NavigationController>>,
    view: Signal<CardView>,
}

impl CardController {
    pub fn new(navigator: NavigationController, view: Signal<CardView>) -> Self {
        let mut navigator = navigator;
        let mut mirror = view;
        navigator.subscribe(move |event| match *event {
            NavigationEvent::PanelChanged { to, .. } => mirror.write().active = to,
            NavigationEvent::OffsetChanged(offset) => mirror.write().offset = offset,
        });
        Self {
            navigator: Rc::new(RefCell::new(navigator)),
            view,
        }
    }

    pub fn active(&self) -> Panel {
        (self.view)().active
    }

    pub fn offset(&self) -> f64 {
        (self.view)().offset
    }

    pub fn visual(&self, panel: Panel) -> PanelVisual {
        let view = (self.view)();
        panel_visual(panel, view.active, view.offset)
    }

    pub fn select_panel(&self, target: Panel) {
        self.navigator.borrow_mut().select_panel(target);
    }

    pub fn touch_start(&self, x: f64, y: f64) {
        self.navigator.borrow_mut().gesture_start(x, y);
    }

    pub fn touch_move(&self, x: f64, y: f64) {
        self.navigator.borrow_mut().gesture_move(x, y);
    }

    pub fn touch_end(&self) {
        self.navigator.borrow_mut().gesture_end();
    }

    /// The host aborted the touch; snap back without changing panel.
    pub fn touch_cancel(&self) {
        self.navigator.borrow_mut().cancel_gesture();
    }

    fn mount(&self) {
        self.navigator.borrow_mut().mount();
    }

    fn unmount(&self) {
        self.navigator.borrow_mut().unmount();
    }
}

/// Create the card's controller once and provide it to descendants.
pub fn use_card_controller(config: &CardConfig) -> CardController {
    let view = use_signal(CardView::default);
    let tuning = config.gesture;
    let telemetry_enabled = config.telemetry.enabled;

    let controller = use_hook(move || {
        let navigator =
            NavigationController::new(tuning).with_telemetry(default_sink(telemetry_enabled));
        let controller = CardController::new(navigator, view);
        controller.mount();
        controller
    });
    use_context_provider(|| controller.clone());

    {
        let controller = controller.clone();
        use_drop(move || controller.unmount());
    }

    controller
}
