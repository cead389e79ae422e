//! Platform-neutral input events consumed by the carousel controller.

use serde::{Deserialize, Serialize};

use crate::gesture::PointerEvent;
use crate::navigation::Control;

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            _ => NavKey::Other,
        }
    }

    /// Keys that activate a focused card
    pub fn is_confirm(&self) -> bool {
        matches!(self, NavKey::Enter | NavKey::Space)
    }
}

/// One user or environment event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key pressed anywhere in the window
    Key(NavKey),
    /// Key pressed while card `index` has focus
    CardKey(usize, NavKey),
    /// Wheel or trackpad scroll
    Wheel { dx: f64, dy: f64 },
    /// Normalized mouse or touch event
    Pointer(PointerEvent),
    /// Pointer left the interaction surface
    PointerLeave,
    /// Previous / next button
    Control(Control),
    /// Click on a card outside its tokens
    CardBody(usize),
    /// Click on punch slot `slot` of card `index`
    Token { index: usize, slot: usize },
    /// Viewport resized to `width` px
    Viewport(f32),
}

/// Whether the platform's default action for an event should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disposition {
    #[default]
    Default,
    /// Suppress default handling (page scroll on touch drag, space-bar scroll)
    PreventDefault,
}
