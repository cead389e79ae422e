//! Carousel tuning.
//!
//! Every constant the layout engine, gesture tracker and wheel throttle use
//! lives here. A JSON file may override any subset of fields:
//!
//! ```json
//! { "layout": { "gap": 110 }, "wheel_cooldown_ms": 200 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Constants for the pyramid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between neighbouring cards (px)
    pub gap: f32,
    /// Depth step per rank (px)
    pub depth: f32,
    /// Cards never recede further than this (px)
    pub depth_cap: f32,
    /// Scale lost per rank
    pub scale_step: f32,
    /// Scale floor
    pub min_scale: f32,
    /// Opacity lost per rank
    pub opacity_step: f32,
    /// Maximum total fade; opacity never drops below `1 - max_fade`
    pub max_fade: f32,
    /// Side-card lift on narrow viewports (px, clamped)
    pub narrow_lift: f32,
    /// Side-card drop per rank on wide viewports (px)
    pub wide_drop: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 90.0,
            depth: 100.0,
            depth_cap: 999.0,
            scale_step: 0.12,
            min_scale: 0.65,
            opacity_step: 0.18,
            max_fade: 0.8,
            narrow_lift: 14.0,
            wide_drop: 8.0,
        }
    }
}

/// Constants for drag gestures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Net travel (px) a drag must exceed to change cards
    pub commit_threshold: f32,
    /// Fraction of the drag distance applied to the live nudge
    pub damping: f32,
    /// Live nudge clamp (px)
    pub max_nudge: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 50.0,
            damping: 0.15,
            max_nudge: 40.0,
        }
    }
}

/// Complete carousel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub layout: LayoutConfig,
    pub gesture: GestureConfig,
    /// Wheel events arriving within this window of the last handled one are dropped
    pub wheel_cooldown_ms: u64,
    /// Viewports at most this wide (px) use the narrow layout
    pub narrow_breakpoint: f32,
    /// Extra attempts made when saving a punch count fails
    pub save_retries: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            gesture: GestureConfig::default(),
            wheel_cooldown_ms: 140,
            narrow_breakpoint: 560.0,
            save_retries: 1,
        }
    }
}

impl CarouselConfig {
    /// Read a JSON config file; absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> DeckResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(self.wheel_cooldown_ms)
    }

    /// Reject values that would break layout or gesture invariants
    pub fn validate(&self) -> DeckResult<()> {
        let layout = &self.layout;
        if !is_positive(layout.gap) {
            return Err(DeckError::Config(format!("gap must be positive, got {}", layout.gap)));
        }
        if !is_positive(layout.depth) || !is_positive(layout.depth_cap) {
            return Err(DeckError::Config("depth and depth_cap must be positive".into()));
        }
        if layout.min_scale.is_nan() || layout.min_scale <= 0.0 || layout.min_scale > 1.0 {
            return Err(DeckError::Config(format!(
                "min_scale must be in (0, 1], got {}",
                layout.min_scale
            )));
        }
        if layout.max_fade.is_nan() || layout.max_fade < 0.0 || layout.max_fade >= 1.0 {
            return Err(DeckError::Config(format!(
                "max_fade must be in [0, 1), got {}",
                layout.max_fade
            )));
        }
        if !is_non_negative(layout.scale_step) || !is_non_negative(layout.opacity_step) {
            return Err(DeckError::Config("scale_step and opacity_step must not be negative".into()));
        }

        let gesture = &self.gesture;
        if [gesture.commit_threshold, gesture.damping, gesture.max_nudge]
            .into_iter()
            .any(|value| !is_non_negative(value))
        {
            return Err(DeckError::Config("gesture constants must not be negative".into()));
        }
        if !is_positive(self.narrow_breakpoint) {
            return Err(DeckError::Config("narrow_breakpoint must be positive".into()));
        }
        Ok(())
    }
}

/// Strictly positive and not NaN
fn is_positive(value: f32) -> bool {
    !value.is_nan() && value > 0.0
}

fn is_non_negative(value: f32) -> bool {
    !value.is_nan() && value >= 0.0
}
