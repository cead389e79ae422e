//! Punchdeck UI Components
//!
//! Dioxus components for drawing loyalty cards: the card face with its
//! punch tokens, the paging buttons and the loading / error panel.
//!
//! Components only render what they are given and report clicks and key
//! presses upward. Carousel state lives in `punchdeck-core`.

pub mod components;

pub use components::*;
