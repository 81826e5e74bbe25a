//! Touch gesture interpretation for the card strip.
//!
//! A gesture is one down/move*/up sequence. Moves are classified as either a
//! vertical scroll (which the card ignores for the rest of the gesture) or a
//! horizontal swipe (which drags the active panel and may commit a move to a
//! neighbouring panel on release).

use crate::components::panel::{Direction, Panel};
use crate::config::GestureTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureClass {
    #[default]
    Undetermined,
    Scrolling,
    Swiping,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub x: f64,
    pub y: f64,
}

impl GestureSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transient state of the gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub start: Option<GestureSample>,
    pub end_x: Option<f64>,
    pub class: GestureClass,
    pub offset: f64,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    tuning: GestureTuning,
    state: GestureState,
}

impl GestureInterpreter {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            tuning,
            state: GestureState::default(),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    /// Cancel whatever gesture was in flight.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.reset();
        self.state.start = Some(GestureSample::new(x, y));
    }

    /// Feed one pointer sample while `active` is the visible panel.
    /// Returns true when the drag offset changed.
    pub fn move_to(&mut self, x: f64, y: f64, active: Panel) -> bool {
        let Some(start) = self.state.start else {
            return false;
        };
        if self.state.class == GestureClass::Scrolling {
            return false;
        }

        let dx = (x - start.x).abs();
        let dy = (y - start.y).abs();
        let tuning = self.tuning;
        let previous = self.state.offset;

        if dy > dx * tuning.scroll_ratio && dy > tuning.scroll_min_px {
            self.state.class = GestureClass::Scrolling;
            self.state.offset = 0.0;
            return previous != 0.0;
        }

        if dx > dy * tuning.swipe_ratio && dx > tuning.swipe_min_px {
            self.state.class = GestureClass::Swiping;
            self.state.end_x = Some(x);

            let diff = x - start.x;
            if active.accepts_drag(diff) {
                self.state.offset = diff.clamp(-tuning.max_offset_px, tuning.max_offset_px);
            }
        }

        self.state.offset != previous
    }

    /// Finish the gesture. Returns the committed transition, if any.
    /// The gesture state is always cleared.
    pub fn end(&mut self) -> Option<Direction> {
        let state = std::mem::take(&mut self.state);
        if state.class == GestureClass::Scrolling {
            return None;
        }
        let (start, end_x) = (state.start?, state.end_x?);

        let distance = start.x - end_x;
        if distance > self.tuning.commit_distance_px {
            Some(Direction::Forward)
        } else if distance < -self.tuning.commit_distance_px {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(GestureTuning::default())
    }

    #[test]
    fn left_swipe_on_main_drags_and_commits_forward() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        assert!(gesture.move_to(-60.0, 0.0, Panel::Main));
        assert_eq!(gesture.offset(), -60.0);
        assert_eq!(gesture.state().class, GestureClass::Swiping);
        assert_eq!(gesture.end(), Some(Direction::Forward));
        assert_eq!(*gesture.state(), GestureState::default());
    }

    #[test]
    fn vertical_motion_is_classified_as_scrolling() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(5.0, 30.0, Panel::Main);
        assert_eq!(gesture.state().class, GestureClass::Scrolling);
        assert_eq!(gesture.offset(), 0.0);
        assert_eq!(gesture.end(), None);
    }

    #[test]
    fn scrolling_is_sticky() {
        let mut gesture = interpreter();
        gesture.start(100.0, 100.0);
        gesture.move_to(100.0, 130.0, Panel::Bio);
        assert!(!gesture.move_to(0.0, 130.0, Panel::Bio));
        assert_eq!(gesture.offset(), 0.0);
        assert_eq!(gesture.state().class, GestureClass::Scrolling);
        assert_eq!(gesture.end(), None);
    }

    #[test]
    fn scroll_rule_overrides_an_earlier_swipe() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(20.0, 0.0, Panel::Bio);
        assert_eq!(gesture.offset(), 20.0);
        gesture.move_to(20.0, 80.0, Panel::Bio);
        assert_eq!(gesture.state().class, GestureClass::Scrolling);
        assert_eq!(gesture.offset(), 0.0);
        assert_eq!(gesture.end(), None);
    }

    #[test]
    fn discography_ignores_left_drag_and_stays_put() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        assert!(!gesture.move_to(-60.0, 0.0, Panel::Discography));
        assert_eq!(gesture.offset(), 0.0);
        let landing = gesture
            .end()
            .map_or(Panel::Discography, |direction| Panel::Discography.step(direction));
        assert_eq!(landing, Panel::Discography);
    }

    #[test]
    fn main_ignores_right_drag() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(70.0, 0.0, Panel::Main);
        assert_eq!(gesture.offset(), 0.0);
    }

    #[test]
    fn interior_panels_drag_both_ways_and_clamp() {
        let mut gesture = interpreter();
        gesture.start(200.0, 0.0);
        gesture.move_to(450.0, 10.0, Panel::Info);
        assert_eq!(gesture.offset(), 100.0);
        gesture.move_to(-50.0, 10.0, Panel::Info);
        assert_eq!(gesture.offset(), -100.0);
        assert_eq!(gesture.end(), Some(Direction::Forward));
    }

    #[test]
    fn right_swipe_commits_backward() {
        let mut gesture = interpreter();
        gesture.start(10.0, 10.0);
        gesture.move_to(80.0, 12.0, Panel::Bio);
        assert_eq!(gesture.end(), Some(Direction::Backward));
    }

    #[test]
    fn short_swipe_does_not_commit() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(-40.0, 0.0, Panel::Bio);
        assert_eq!(gesture.offset(), -40.0);
        assert_eq!(gesture.end(), None);
        assert_eq!(gesture.offset(), 0.0);
    }

    #[test]
    fn commit_uses_the_last_swipe_sample() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(-80.0, 0.0, Panel::Bio);
        // Small diagonal wobble near the origin passes neither rule.
        gesture.move_to(-8.0, 8.0, Panel::Bio);
        assert_eq!(gesture.state().end_x, Some(-80.0));
        assert_eq!(gesture.end(), Some(Direction::Forward));
    }

    #[test]
    fn small_motion_stays_undetermined() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        assert!(!gesture.move_to(12.0, 9.0, Panel::Bio));
        assert_eq!(gesture.state().class, GestureClass::Undetermined);
        assert_eq!(gesture.state().end_x, None);
        assert_eq!(gesture.end(), None);
    }

    #[test]
    fn move_and_end_without_start_are_noops() {
        let mut gesture = interpreter();
        assert!(!gesture.move_to(-90.0, 0.0, Panel::Main));
        assert_eq!(gesture.offset(), 0.0);
        assert_eq!(gesture.end(), None);
        assert_eq!(*gesture.state(), GestureState::default());
    }

    #[test]
    fn start_overwrites_a_stale_gesture() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        gesture.move_to(0.0, 50.0, Panel::Main);
        gesture.start(300.0, 300.0);
        assert_eq!(gesture.state().class, GestureClass::Undetermined);
        assert_eq!(gesture.state().start, Some(GestureSample::new(300.0, 300.0)));
        gesture.move_to(230.0, 300.0, Panel::Main);
        assert_eq!(gesture.offset(), -70.0);
        assert_eq!(gesture.end(), Some(Direction::Forward));
    }

    #[test]
    fn start_at_origin_is_a_real_gesture() {
        let mut gesture = interpreter();
        gesture.start(0.0, 0.0);
        assert!(gesture.state().is_active());
    }

    fn sample() -> impl Strategy<Value = (f64, f64)> {
        (-500.0f64..500.0, -500.0f64..500.0)
    }

    fn panel() -> impl Strategy<Value = Panel> {
        prop_oneof![
            Just(Panel::Main),
            Just(Panel::Bio),
            Just(Panel::Info),
            Just(Panel::Discography),
        ]
    }

    proptest! {
        #[test]
        fn offset_never_exceeds_limit(
            start in sample(),
            moves in prop::collection::vec(sample(), 0..40),
            active in panel(),
        ) {
            let mut gesture = interpreter();
            gesture.start(start.0, start.1);
            for (x, y) in moves {
                gesture.move_to(x, y, active);
                prop_assert!(gesture.offset().abs() <= 100.0);
            }
        }

        #[test]
        fn end_always_clears(
            start in sample(),
            moves in prop::collection::vec(sample(), 0..20),
            active in panel(),
        ) {
            let mut gesture = interpreter();
            gesture.start(start.0, start.1);
            for (x, y) in moves {
                gesture.move_to(x, y, active);
            }
            gesture.end();
            prop_assert_eq!(*gesture.state(), GestureState::default());
        }

        #[test]
        fn scrolling_gestures_never_commit(
            moves in prop::collection::vec(sample(), 0..20),
            active in panel(),
        ) {
            let mut gesture = interpreter();
            gesture.start(0.0, 0.0);
            gesture.move_to(0.0, 40.0, active);
            for (x, y) in moves {
                gesture.move_to(x, y, active);
                prop_assert_eq!(gesture.offset(), 0.0);
            }
            prop_assert_eq!(gesture.end(), None);
        }

        #[test]
        fn gestures_below_swipe_threshold_never_commit(
            moves in prop::collection::vec((-15.0f64..=15.0, -10.0f64..=10.0), 0..20),
            active in panel(),
        ) {
            let mut gesture = interpreter();
            gesture.start(0.0, 0.0);
            for (x, y) in moves {
                gesture.move_to(x, y, active);
            }
            prop_assert_eq!(gesture.end(), None);
        }
    }
}
