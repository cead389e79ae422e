//! Carousel context for Punchdeck.
//!
//! Provides the carousel controller and the view state it writes to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let view = use_deck_view();
//! let carousel = use_carousel();
//! let width = use_stage_width();
//! ```

use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;
use punchdeck_core::mock::{MockDataSource, MockPunchStore};
use punchdeck_core::{CarouselConfig, CarouselController, Disposition, InputEvent};

use crate::presenter::{DeckView, SignalPresenter};

/// Controller type used by the desktop app
pub type Carousel = CarouselController<SignalPresenter, MockPunchStore>;

/// Everything resolved from the command line
#[derive(Debug)]
pub struct Settings {
    pub config: CarouselConfig,
    /// Shared across retries so injected failures are consumed once
    pub source: MockDataSource,
    pub store: Arc<MockPunchStore>,
}

pub fn settings() -> &'static Settings {
    crate::get_settings()
}

/// Hook to access the carousel controller (None until the deck loads)
pub fn use_carousel() -> Signal<Option<Carousel>> {
    use_context::<Signal<Option<Carousel>>>()
}

/// Hook to access what the controller last presented
pub fn use_deck_view() -> Signal<DeckView> {
    use_context::<Signal<DeckView>>()
}

/// Hook to access the last measured stage width.
///
/// Resize events arrive before the deck has loaded, so the width is kept
/// here and handed to the controller once it exists.
pub fn use_stage_width() -> Signal<Option<f32>> {
    use_context::<Signal<Option<f32>>>()
}

/// Feed one input event to the controller, if it is running.
pub fn send(mut carousel: Signal<Option<Carousel>>, event: InputEvent) -> Disposition {
    match carousel.write().as_mut() {
        Some(controller) => controller.handle(event, Instant::now()),
        None => Disposition::Default,
    }
}

/// Load the deck and install the controller.
///
/// On failure the view is already in its error state; retrying calls this
/// again. The stage width is read after loading so resizes during the load
/// are not lost.
pub async fn boot(
    mut carousel: Signal<Option<Carousel>>,
    view: Signal<DeckView>,
    width: Signal<Option<f32>>,
) {
    let settings = settings();
    let started = CarouselController::start(
        &settings.source,
        SignalPresenter::new(view),
        settings.store.clone(),
        settings.config.clone(),
    )
    .await;

    match started {
        Ok(mut controller) => {
            if let Some(measured) = *width.peek() {
                controller.set_viewport_width(measured);
            }
            tracing::info!(
                cards = controller.len(),
                viewport = ?controller.viewport(),
                "Carousel ready"
            );
            carousel.set(Some(controller));
        }
        Err(e) => tracing::warn!(error = %e, "Carousel not started"),
    }
}
