//! Panel view telemetry.
//!
//! The card reports which panel is viewed and how long it stayed visible.
//! Sinks are optional; with none installed every emission is dropped.

use crate::components::panel::Panel;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    PanelViewed { panel: Panel },
    TimeSpent { panel: Panel, seconds: u64 },
}

pub trait TelemetrySink {
    fn emit(&self, event: &TelemetryEvent);
}

/// Wall clock used to time panel visits.
pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

pub fn system_clock() -> Clock {
    Rc::new(Utc::now)
}

/// Whole seconds between two instants, rounded to the nearest second.
pub fn rounded_seconds(since: DateTime<Utc>, until: DateTime<Utc>) -> u64 {
    let millis = (until - since).num_milliseconds().max(0);
    (millis as f64 / 1000.0).round() as u64
}

/// Forwards every event to each inner sink in order.
#[derive(Clone, Default)]
pub struct SinkSet(Vec<Rc<dyn TelemetrySink>>);

impl SinkSet {
    pub fn push(&mut self, sink: Rc<dyn TelemetrySink>) {
        self.0.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TelemetrySink for SinkSet {
    fn emit(&self, event: &TelemetryEvent) {
        for sink in &self.0 {
            sink.emit(event);
        }
    }
}

pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn emit(&self, event: &TelemetryEvent) {
        match event {
            TelemetryEvent::PanelViewed { panel } => {
                debug!(panel = panel.display_name(), "panel viewed")
            }
            TelemetryEvent::TimeSpent { panel, seconds } => {
                debug!(panel = panel.display_name(), seconds, "panel time spent")
            }
        }
    }
}

/// Reports to Google Analytics through `window.gtag` when the page defines it.
#[cfg(target_arch = "wasm32")]
pub struct GtagSink;

#[cfg(target_arch = "wasm32")]
impl GtagSink {
    fn call(name: &str, params: serde_json::Value) {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(win) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = js_sys::Reflect::get(&win, &"gtag".into()) else {
            return;
        };
        let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() else {
            return;
        };
        let Ok(params) = js_sys::JSON::parse(&params.to_string()) else {
            return;
        };
        if let Err(err) = gtag.call3(&JsValue::NULL, &"event".into(), &name.into(), &params) {
            tracing::warn!("gtag call for {name} failed: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TelemetrySink for GtagSink {
    fn emit(&self, event: &TelemetryEvent) {
        use serde_json::json;

        match event {
            TelemetryEvent::PanelViewed { panel } => {
                let location = web_sys::window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_default();
                Self::call(
                    "page_view",
                    json!({
                        "page_title": panel.display_name(),
                        "page_location": location,
                        "page_path": format!("/{}", panel.key()),
                    }),
                );
                Self::call(
                    "card_view",
                    json!({ "card_name": panel.display_name(), "card_type": panel.key() }),
                );
            }
            TelemetryEvent::TimeSpent { panel, seconds } => Self::call(
                "card_time_spent",
                json!({
                    "card_name": panel.display_name(),
                    "card_type": panel.key(),
                    "time_spent_seconds": seconds,
                }),
            ),
        }
    }
}

/// Sinks installed for the current platform, or `None` when telemetry is off.
pub fn default_sink(enabled: bool) -> Option<Rc<dyn TelemetrySink>> {
    if !enabled {
        return None;
    }
    let mut sinks = SinkSet::default();
    sinks.push(Rc::new(TracingSink));
    #[cfg(target_arch = "wasm32")]
    sinks.push(Rc::new(GtagSink));
    Some(Rc::new(sinks))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    /// Collects every event for later assertions.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub events: RefCell<Vec<TelemetryEvent>>,
    }

    impl TelemetrySink for RecordingSink {
        fn emit(&self, event: &TelemetryEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    /// A clock that only moves when told to.
    pub(crate) fn manual_clock() -> (Clock, Rc<Cell<i64>>) {
        let millis = Rc::new(Cell::new(0_i64));
        let reading = millis.clone();
        let clock: Clock = Rc::new(move || {
            Utc.timestamp_millis_opt(1_700_000_000_000 + reading.get())
                .single()
                .unwrap_or_default()
        });
        (clock, millis)
    }

    #[test]
    fn rounded_seconds_rounds_to_nearest() {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let at = |millis: i64| start + chrono::Duration::milliseconds(millis);
        assert_eq!(rounded_seconds(start, at(0)), 0);
        assert_eq!(rounded_seconds(start, at(499)), 0);
        assert_eq!(rounded_seconds(start, at(500)), 1);
        assert_eq!(rounded_seconds(start, at(2_400)), 2);
        assert_eq!(rounded_seconds(start, at(-5_000)), 0);
    }

    #[test]
    fn sink_set_fans_out() {
        let first = Rc::new(RecordingSink::default());
        let second = Rc::new(RecordingSink::default());
        let mut set = SinkSet::default();
        set.push(first.clone());
        set.push(second.clone());

        set.emit(&TelemetryEvent::PanelViewed { panel: Panel::Bio });

        assert_eq!(first.events.borrow().len(), 1);
        assert_eq!(second.events.borrow().len(), 1);
    }

    #[test]
    fn disabled_telemetry_installs_no_sink() {
        assert!(default_sink(false).is_none());
        assert!(default_sink(true).is_some());
    }
}
