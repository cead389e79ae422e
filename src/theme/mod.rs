//! Visual theme for Punchdeck.

mod styles;

pub use styles::GLOBAL_STYLES;
