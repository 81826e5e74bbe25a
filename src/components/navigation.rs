//! Card navigation: the active panel, the live drag offset, and the
//! per-panel visual state derived from them.
//!
//! `NavigationController` is plain Rust. It publishes `NavigationEvent`s to
//! subscribers; the Dioxus layer in `card_controller` mirrors them into a
//! signal for rendering.

use crate::components::gesture::{GestureInterpreter, GestureState};
use crate::components::panel::{Direction, Panel, PANELS};
use crate::components::telemetry::{
    rounded_seconds, system_clock, Clock, TelemetryEvent, TelemetrySink,
};
use crate::config::GestureTuning;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationEvent {
    PanelChanged { from: Panel, to: Panel },
    OffsetChanged(f64),
}

type Listener = Box<dyn FnMut(&NavigationEvent)>;

/// Horizontal placement of a panel inside the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translate {
    Pixels(f64),
    /// Parked one card width to the left.
    Before,
    /// Parked one card width to the right.
    After,
}

impl Translate {
    pub fn css(self) -> String {
        match self {
            Self::Pixels(px) => format!("translateX({px}px)"),
            Self::Before => "translateX(-100%)".to_string(),
            Self::After => "translateX(100%)".to_string(),
        }
    }
}

/// Enter/exit visual state of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelVisual {
    pub translate: Translate,
    pub opacity: f64,
    pub z_index: u8,
    pub interactive: bool,
}

impl PanelVisual {
    pub fn style(&self) -> String {
        format!(
            "transform: {}; opacity: {}; z-index: {};",
            self.translate.css(),
            self.opacity,
            self.z_index
        )
    }
}

/// Visual state of `panel` when `active` is shown with drag `offset`.
pub fn panel_visual(panel: Panel, active: Panel, offset: f64) -> PanelVisual {
    let is_active = panel == active;
    let translate = if is_active {
        Translate::Pixels(offset)
    } else if panel < active {
        Translate::Before
    } else {
        Translate::After
    };
    PanelVisual {
        translate,
        opacity: if is_active { 1.0 } else { 0.0 },
        z_index: if is_active { 10 } else { 1 },
        interactive: is_active,
    }
}

pub struct NavigationController {
    active: Panel,
    gesture: GestureInterpreter,
    listeners: Vec<Listener>,
    telemetry: Option<Rc<dyn TelemetrySink>>,
    clock: Clock,
    viewed_since: Option<DateTime<Utc>>,
}

impl NavigationController {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            active: Panel::Main,
            gesture: GestureInterpreter::new(tuning),
            listeners: Vec::new(),
            telemetry: None,
            clock: system_clock(),
            viewed_since: None,
        }
    }

    pub fn with_telemetry(mut self, sink: Option<Rc<dyn TelemetrySink>>) -> Self {
        self.telemetry = sink;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&NavigationEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    /// Drag offset of the active panel; 0 whenever no swipe is in progress.
    pub fn offset(&self) -> f64 {
        self.gesture.offset()
    }

    pub fn gesture(&self) -> &GestureState {
        self.gesture.state()
    }

    pub fn visual(&self, panel: Panel) -> PanelVisual {
        panel_visual(panel, self.active, self.offset())
    }

    pub fn visuals(&self) -> [PanelVisual; 4] {
        PANELS.map(|panel| self.visual(panel))
    }

    /// Start timing the initial panel. Call once when the card mounts.
    pub fn mount(&mut self) {
        self.begin_view(self.active);
    }

    /// Flush the time spent on the current panel. Call when the card unmounts.
    pub fn unmount(&mut self) {
        self.end_view(self.active);
    }

    /// Jump straight to `target`, cancelling any drag in flight.
    pub fn select_panel(&mut self, target: Panel) {
        self.cancel_gesture();
        self.set_active(target);
    }

    /// Move one step along the strip, saturating at either end.
    pub fn apply_gesture_transition(&mut self, direction: Direction) {
        let target = self.active.step(direction);
        self.set_active(target);
    }

    pub fn gesture_start(&mut self, x: f64, y: f64) {
        let had_offset = self.offset() != 0.0;
        self.gesture.start(x, y);
        if had_offset {
            self.publish(NavigationEvent::OffsetChanged(0.0));
        }
    }

    pub fn gesture_move(&mut self, x: f64, y: f64) {
        if self.gesture.move_to(x, y, self.active) {
            self.publish(NavigationEvent::OffsetChanged(self.offset()));
        }
    }

    /// Finish the gesture and apply its committed transition, if any.
    pub fn gesture_end(&mut self) -> Option<Direction> {
        let had_offset = self.offset() != 0.0;
        let committed = self.gesture.end();
        if had_offset {
            self.publish(NavigationEvent::OffsetChanged(0.0));
        }
        if let Some(direction) = committed {
            debug!(?direction, from = %self.active, "swipe committed");
            self.apply_gesture_transition(direction);
        }
        committed
    }

    /// Drop the gesture in flight without committing a transition.
    pub fn cancel_gesture(&mut self) {
        let had_offset = self.offset() != 0.0;
        self.gesture.reset();
        if had_offset {
            self.publish(NavigationEvent::OffsetChanged(0.0));
        }
    }

    fn set_active(&mut self, target: Panel) {
        let from = self.active;
        if from == target {
            return;
        }
        self.end_view(from);
        self.active = target;
        debug!(%from, to = %target, "panel changed");
        self.publish(NavigationEvent::PanelChanged { from, to: target });
        self.begin_view(target);
    }

    fn begin_view(&mut self, panel: Panel) {
        self.viewed_since = Some((self.clock)());
        self.report(TelemetryEvent::PanelViewed { panel });
    }

    fn end_view(&mut self, panel: Panel) {
        let Some(since) = self.viewed_since.take() else {
            return;
        };
        let seconds = rounded_seconds(since, (self.clock)());
        if seconds > 0 {
            self.report(TelemetryEvent::TimeSpent { panel, seconds });
        }
    }

    fn report(&self, event: TelemetryEvent) {
        if let Some(sink) = &self.telemetry {
            sink.emit(&event);
        }
    }

    fn publish(&mut self, event: NavigationEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
