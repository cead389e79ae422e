//! Drag gesture tracking.
//!
//! Mouse and touch input are normalized into [`PointerEvent`]s before they
//! reach the tracker, so both share one Idle -> Dragging -> Idle machine:
//!
//! ```text
//!   Idle --Start(x)--> Dragging --Move(x)--> Dragging (live nudge)
//!                          |
//!                          +--End / PointerLeave--> Idle (commit or snap back)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::GestureConfig;
use crate::layout::rail_nudge;
use crate::navigation::Step;

/// Phase of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// Where a pointer event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Normalized pointer event: one phase at one horizontal coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
    /// Client x coordinate; ignored for `End`
    pub x: f32,
}

impl PointerEvent {
    /// Adapter for a primary mouse button event
    pub fn mouse(phase: PointerPhase, client_x: f64) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            x: client_x as f32,
        }
    }

    /// Adapter for a touch event; only the first touch point is tracked.
    ///
    /// `touches` is the list of active touch x coordinates. Touch-end events
    /// carry no active points, so `End` never needs one.
    pub fn touch(phase: PointerPhase, touches: &[f64]) -> Option<Self> {
        let x = match (phase, touches.first()) {
            (PointerPhase::End, first) => first.copied().unwrap_or(0.0),
            (_, Some(x)) => *x,
            (_, None) => return None,
        };
        Some(Self {
            phase,
            source: PointerSource::Touch,
            x: x as f32,
        })
    }
}

/// What the rail should do after a gesture event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// Nothing to do (not dragging)
    Ignored,
    /// A drag began; switch the rail to a fast transition
    Started,
    /// Live nudge offset for the rail (px)
    Nudge(f32),
    /// Drag ended past the threshold
    Commit(Step),
    /// Drag ended short of the threshold; restore layout unchanged
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { origin: f32, delta: f32 },
}

/// Converts pointer movement into nudges and committed steps
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    state: DragState,
}

impl GestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Net horizontal movement of the current drag (0 when idle)
    pub fn delta(&self) -> f32 {
        match self.state {
            DragState::Idle => 0.0,
            DragState::Dragging { delta, .. } => delta,
        }
    }

    /// Feed one normalized pointer event
    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.phase {
            PointerPhase::Start => self.start(event.x),
            PointerPhase::Move => self.move_to(event.x),
            PointerPhase::End => self.end(),
        }
    }

    /// Press: record the origin. A second press restarts the drag.
    pub fn start(&mut self, x: f32) -> GestureOutcome {
        self.state = DragState::Dragging {
            origin: x,
            delta: 0.0,
        };
        GestureOutcome::Started
    }

    pub fn move_to(&mut self, x: f32) -> GestureOutcome {
        match &mut self.state {
            DragState::Idle => GestureOutcome::Ignored,
            DragState::Dragging { origin, delta } => {
                *delta = x - *origin;
                GestureOutcome::Nudge(rail_nudge(
                    *delta,
                    self.config.damping,
                    self.config.max_nudge,
                ))
            }
        }
    }

    /// Release, or the pointer leaving the surface mid-drag
    pub fn end(&mut self) -> GestureOutcome {
        let DragState::Dragging { delta, .. } = self.state else {
            return GestureOutcome::Ignored;
        };
        self.state = DragState::Idle;

        if delta.abs() > self.config.commit_threshold {
            // Dragging right reveals the previous card
            if delta > 0.0 {
                GestureOutcome::Commit(Step::Prev)
            } else {
                GestureOutcome::Commit(Step::Next)
            }
        } else {
            GestureOutcome::SnapBack
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut GestureTracker, from: f32, to: f32) -> GestureOutcome {
        tracker.start(from);
        tracker.move_to(to);
        tracker.end()
    }

    #[test]
    fn test_commit_directions() {
        let mut tracker = GestureTracker::default();
        assert_eq!(drag(&mut tracker, 100.0, 160.0), GestureOutcome::Commit(Step::Prev));
        assert_eq!(drag(&mut tracker, 100.0, 40.0), GestureOutcome::Commit(Step::Next));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut tracker = GestureTracker::default();
        assert_eq!(drag(&mut tracker, 100.0, 130.0), GestureOutcome::SnapBack);
        assert_eq!(drag(&mut tracker, 100.0, 70.0), GestureOutcome::SnapBack);
        // Exactly at the threshold does not commit
        assert_eq!(drag(&mut tracker, 0.0, 50.0), GestureOutcome::SnapBack);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.delta(), 0.0);
    }

    #[test]
    fn test_move_and_end_ignored_when_idle() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.move_to(500.0), GestureOutcome::Ignored);
        assert_eq!(tracker.end(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_nudge_is_damped_and_clamped() {
        let mut tracker = GestureTracker::default();
        tracker.start(0.0);
        match tracker.move_to(100.0) {
            GestureOutcome::Nudge(offset) => assert!((offset - 15.0).abs() < 1e-4),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(tracker.move_to(-900.0), GestureOutcome::Nudge(-40.0));
        assert_eq!(tracker.delta(), -900.0);
    }

    #[test]
    fn test_delta_measured_from_origin_not_last_move() {
        let mut tracker = GestureTracker::default();
        tracker.start(200.0);
        tracker.move_to(230.0);
        tracker.move_to(260.0);
        assert_eq!(tracker.end(), GestureOutcome::Commit(Step::Prev));
    }

    #[test]
    fn test_touch_adapter_uses_first_point() {
        let event = PointerEvent::touch(PointerPhase::Start, &[12.0, 400.0]).unwrap();
        assert_eq!(event.x, 12.0);
        assert_eq!(event.source, PointerSource::Touch);

        assert!(PointerEvent::touch(PointerPhase::Move, &[]).is_none());
        assert!(PointerEvent::touch(PointerPhase::End, &[]).is_some());
    }

    #[test]
    fn test_mouse_and_touch_share_outcomes() {
        let mut mouse = GestureTracker::default();
        let mut touch = GestureTracker::default();

        for (phase, x) in [
            (PointerPhase::Start, 300.0),
            (PointerPhase::Move, 280.0),
            (PointerPhase::Move, 220.0),
            (PointerPhase::End, 0.0),
        ] {
            let a = mouse.handle(PointerEvent::mouse(phase, x));
            let b = touch.handle(PointerEvent::touch(phase, &[x]).unwrap());
            assert_eq!(a, b);
        }
    }
}
