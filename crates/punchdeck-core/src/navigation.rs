//! Focused-index state machine.
//!
//! The deck length is fixed for the session. Every transition reports
//! whether the index actually moved so callers only re-run layout on change.

use serde::{Deserialize, Serialize};

/// The two paging controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Prev,
    Next,
}

/// Direction of a committed navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Prev,
    Next,
}

/// Focused index over a deck of fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// Start focused on the first card
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Focus card `i`; out-of-range requests are ignored.
    ///
    /// Returns true when `i` was accepted, even if it was already focused.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        self.index = i;
        true
    }

    /// Step right; no-op at the last card
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step left; no-op at the first card
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self, step: Step) -> bool {
        match step {
            Step::Prev => self.prev(),
            Step::Next => self.next(),
        }
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Whether a control should be enabled at the current index
    pub fn control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Prev => self.can_prev(),
            Control::Next => self.can_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let nav = Navigator::new(6);
        assert_eq!(nav.index(), 0);
        assert!(!nav.can_prev());
        assert!(nav.can_next());
    }

    #[test]
    fn test_go_to_in_and_out_of_range() {
        let mut nav = Navigator::new(6);
        assert!(nav.go_to(4));
        assert_eq!(nav.index(), 4);

        assert!(!nav.go_to(6));
        assert!(!nav.go_to(usize::MAX));
        assert_eq!(nav.index(), 4);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut nav = Navigator::new(3);
        assert!(!nav.prev());
        assert_eq!(nav.index(), 0);

        assert!(nav.next());
        assert!(nav.next());
        assert!(!nav.next());
        assert_eq!(nav.index(), 2);
        assert!(!nav.control_enabled(Control::Next));
        assert!(nav.control_enabled(Control::Prev));
    }

    #[test]
    fn test_single_card_disables_both_controls() {
        let nav = Navigator::new(1);
        assert!(!nav.control_enabled(Control::Prev));
        assert!(!nav.control_enabled(Control::Next));
    }

    #[test]
    fn test_empty_deck() {
        let mut nav = Navigator::new(0);
        assert!(nav.is_empty());
        assert!(!nav.go_to(0));
        assert!(!nav.next());
        assert!(!nav.prev());
    }

    #[test]
    fn test_step() {
        let mut nav = Navigator::new(3);
        assert!(nav.step(Step::Next));
        assert!(nav.step(Step::Prev));
        assert!(!nav.step(Step::Prev));
    }
}
