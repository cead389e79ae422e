//! Punchdeck Core Library
//!
//! State, layout and input handling for a loyalty punch-card carousel.
//!
//! ## Overview
//!
//! A deck of cards is loaded once from a [`DataSource`] and shown as a
//! pseudo-3D pyramid centered on the focused card. Users page through it
//! with buttons, arrow keys, the wheel or a drag, and punch a card by
//! clicking one of its ten tokens. Punches are saved through a
//! [`PunchStore`] in the background.
//!
//! Nothing here knows about a widget toolkit: the [`CarouselController`]
//! drives any UI through the [`Presenter`] port.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Instant;
//! use punchdeck_core::{CarouselConfig, CarouselController, InputEvent, NavKey};
//! use punchdeck_core::mock::{MockDataSource, MockPunchStore};
//!
//! let mut carousel = CarouselController::start(
//!     &MockDataSource::demo(),
//!     my_presenter,
//!     Arc::new(MockPunchStore::demo()),
//!     CarouselConfig::default(),
//! )
//! .await?;
//!
//! carousel.handle(InputEvent::Key(NavKey::ArrowRight), Instant::now());
//! carousel.handle(InputEvent::Token { index: 1, slot: 2 }, Instant::now());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod mock;
pub mod navigation;
pub mod presentation;
pub mod render;
pub mod source;
pub mod types;
pub mod wheel;

// Re-exports
pub use config::{CarouselConfig, GestureConfig, LayoutConfig};
pub use controller::CarouselController;
pub use error::{DeckError, DeckResult};
pub use gesture::{GestureOutcome, GestureTracker, PointerEvent, PointerPhase, PointerSource};
pub use input::{Disposition, InputEvent, NavKey};
pub use layout::{card_transform, layout_deck, CardTransform, ViewportClass};
pub use navigation::{Control, Navigator, Step};
pub use presentation::{Presenter, RailNudge};
pub use render::{card_views, token_fills, CardView, TokenFills, TokenIcon};
pub use source::{load_deck, save_with_retry, DataSource, Deck, PunchStore};
pub use types::*;
pub use wheel::WheelThrottle;
