//! Presentation port.
//!
//! The controller never touches a widget tree directly; it drives any UI
//! binding through [`Presenter`]. The desktop app implements it on top of
//! Dioxus signals, tests implement it with a recorder.

use serde::{Deserialize, Serialize};

use crate::layout::CardTransform;
use crate::navigation::Control;
use crate::render::{CardView, TokenFills};

/// Live rail offset while dragging
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RailNudge {
    /// Horizontal offset (px); 0 is neutral
    pub offset_px: f32,
    /// True while a drag is in progress; the rail should use a fast transition
    pub dragging: bool,
}

impl RailNudge {
    pub const NEUTRAL: RailNudge = RailNudge {
        offset_px: 0.0,
        dragging: false,
    };
}

pub trait Presenter {
    /// Data is being fetched
    fn show_loading(&mut self);

    /// Data could not be fetched; replaces the loading indicator
    fn show_error(&mut self, message: &str);

    /// Rebuild every card from scratch
    fn render_all(&mut self, cards: &[CardView]);

    /// Refresh only the token fill states of one card
    fn update_token_display(&mut self, index: usize, fills: &TokenFills);

    fn set_transform(&mut self, index: usize, transform: CardTransform);

    fn set_control_enabled(&mut self, control: Control, enabled: bool);

    fn set_rail_nudge(&mut self, nudge: RailNudge);
}
