//! Pyramid layout.
//!
//! Each card's transform depends only on its rank distance from the focused
//! card, the viewport class and the [`LayoutConfig`] constants. The front
//! card sits at the origin at full scale; cards further away slide out to
//! the side, recede, shrink and fade.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Coarse viewport width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    /// Phone-sized: side cards rise
    Narrow,
    /// Desktop-sized: side cards drop slightly
    #[default]
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width against a breakpoint (inclusive)
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Computed presentation of one card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    /// Horizontal offset from center (px)
    pub x: f32,
    /// Vertical offset (px); negative lifts
    pub y: f32,
    /// Depth offset (px); never positive
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Paint order; larger paints on top
    pub z_index: i32,
    /// True for exactly one card: the focused one
    pub is_front: bool,
}

impl CardTransform {
    /// CSS `transform` value for a card centered in its rail
    pub fn to_css(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px)) scale({}) translateZ({}px)",
            self.x, self.y, self.scale, self.z
        )
    }
}

/// Transform for the card at `card_index` while `focused` is in front.
pub fn card_transform(
    focused: usize,
    card_index: usize,
    viewport: ViewportClass,
    config: &LayoutConfig,
) -> CardTransform {
    let rank = card_index.abs_diff(focused);
    let k = rank as f32;
    let dir = match card_index.cmp(&focused) {
        std::cmp::Ordering::Less => -1.0,
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Greater => 1.0,
    };

    // `0.0 - v` keeps the front card at +0.0 rather than -0.0
    let y = match viewport {
        ViewportClass::Narrow => 0.0 - (k * config.narrow_lift).min(config.narrow_lift),
        ViewportClass::Wide => k * config.wide_drop,
    };

    CardTransform {
        x: dir * k * config.gap,
        y,
        z: 0.0 - (k * config.depth).min(config.depth_cap),
        scale: (1.0 - k * config.scale_step).max(config.min_scale),
        opacity: 1.0 - (k * config.opacity_step).min(config.max_fade),
        z_index: 1000 - i32::try_from(rank).unwrap_or(i32::MAX - 1000),
        is_front: rank == 0,
    }
}

/// Transforms for a whole deck of `len` cards
pub fn layout_deck(
    focused: usize,
    len: usize,
    viewport: ViewportClass,
    config: &LayoutConfig,
) -> Vec<CardTransform> {
    (0..len)
        .map(|j| card_transform(focused, j, viewport, config))
        .collect()
}

/// Horizontal rail offset shown while a drag is in progress
pub fn rail_nudge(delta: f32, damping: f32, max_nudge: f32) -> f32 {
    (delta * damping).clamp(-max_nudge, max_nudge)
}
