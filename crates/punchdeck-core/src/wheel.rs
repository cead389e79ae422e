//! Wheel and trackpad throttling.
//!
//! A single physical scroll produces a burst of wheel events. Each handled
//! event opens a cooldown window; events inside it are dropped.

use std::time::{Duration, Instant};

use crate::navigation::Step;

#[derive(Debug, Clone)]
pub struct WheelThrottle {
    cooldown: Duration,
    locked_until: Option<Instant>,
}

impl WheelThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            locked_until: None,
        }
    }

    /// Map a wheel event to a navigation step, or `None` while cooling down.
    ///
    /// The dominant axis decides; positive deltas page forward, anything
    /// else pages back.
    pub fn on_wheel(&mut self, dx: f64, dy: f64, now: Instant) -> Option<Step> {
        if self.locked_until.is_some_and(|until| now < until) {
            return None;
        }
        self.locked_until = Some(now + self.cooldown);

        let dominant = if dx.abs() > dy.abs() { dx } else { dy };
        if dominant > 0.0 {
            Some(Step::Next)
        } else {
            Some(Step::Prev)
        }
    }
}
