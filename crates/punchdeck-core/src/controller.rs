//! Carousel controller.
//!
//! Owns the loaded deck and every piece of carousel state, and is the only
//! thing that talks to the [`Presenter`]. All handlers are synchronous; the
//! only asynchronous work is the initial load ([`CarouselController::start`])
//! and fire-and-forget punch saves spawned on the tokio runtime.
//!
//! Layout is always recomputed after the index change that triggered it,
//! inside the same handler call.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::config::CarouselConfig;
use crate::error::DeckResult;
use crate::gesture::{GestureOutcome, GestureTracker, PointerPhase, PointerSource};
use crate::input::{Disposition, InputEvent, NavKey};
use crate::layout::{layout_deck, ViewportClass};
use crate::navigation::{Control, Navigator, Step};
use crate::presentation::{Presenter, RailNudge};
use crate::render::{card_views, token_fills};
use crate::source::{load_deck, save_with_retry, DataSource, Deck, PunchStore};
use crate::types::{Card, CardId, PunchCounts};
use crate::wheel::WheelThrottle;

pub struct CarouselController<P: Presenter, S: PunchStore> {
    config: CarouselConfig,
    cards: Vec<Card>,
    punches: PunchCounts,
    nav: Navigator,
    gesture: GestureTracker,
    wheel: WheelThrottle,
    viewport: ViewportClass,
    presenter: P,
    store: Arc<S>,
}

impl<P: Presenter, S: PunchStore> CarouselController<P, S> {
    /// Show the loading state, load the deck and render it.
    ///
    /// On failure the presenter is switched to its error state and the
    /// error is returned; the caller may retry with a fresh presenter.
    pub async fn start<D: DataSource>(
        source: &D,
        mut presenter: P,
        store: Arc<S>,
        config: CarouselConfig,
    ) -> DeckResult<Self> {
        presenter.show_loading();
        match load_deck(source).await {
            Ok(deck) => Ok(Self::with_deck(deck, presenter, store, config)),
            Err(e) => {
                error!(error = %e, "Failed to load deck");
                presenter.show_error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Render an already loaded deck, focused on the first card
    pub fn with_deck(deck: Deck, presenter: P, store: Arc<S>, config: CarouselConfig) -> Self {
        let Deck { cards, punches } = deck;
        let mut controller = Self {
            nav: Navigator::new(cards.len()),
            gesture: GestureTracker::new(config.gesture),
            wheel: WheelThrottle::new(config.wheel_cooldown()),
            viewport: ViewportClass::default(),
            cards,
            punches,
            presenter,
            store,
            config,
        };
        controller.render_all();
        controller.layout();
        controller
    }

    pub fn index(&self) -> usize {
        self.nav.index()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn punches(&self, id: &CardId) -> u8 {
        self.punches.get(id)
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Dispatch one input event. `now` drives the wheel cooldown.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> Disposition {
        match event {
            InputEvent::Key(NavKey::ArrowLeft) => {
                self.prev();
            }
            InputEvent::Key(NavKey::ArrowRight) => {
                self.next();
            }
            InputEvent::Key(_) => {}
            InputEvent::CardKey(index, key) => {
                if key.is_confirm() {
                    self.go_to(index);
                    return Disposition::PreventDefault;
                }
            }
            InputEvent::Wheel { dx, dy } => {
                if let Some(step) = self.wheel.on_wheel(dx, dy, now) {
                    self.step(step);
                }
            }
            InputEvent::Pointer(pointer) => {
                let suppress = pointer.source == PointerSource::Touch
                    && pointer.phase == PointerPhase::Move
                    && self.gesture.is_dragging();
                let outcome = self.gesture.handle(pointer);
                self.apply_gesture(outcome);
                if suppress {
                    return Disposition::PreventDefault;
                }
            }
            InputEvent::PointerLeave => {
                let outcome = self.gesture.end();
                self.apply_gesture(outcome);
            }
            InputEvent::Control(Control::Prev) => {
                self.prev();
            }
            InputEvent::Control(Control::Next) => {
                self.next();
            }
            InputEvent::CardBody(index) => {
                self.go_to(index);
            }
            InputEvent::Token { index, slot } => {
                self.punch(index, slot);
            }
            InputEvent::Viewport(width) => {
                self.set_viewport_width(width);
            }
        }
        Disposition::Default
    }

    /// Focus card `i`, ignoring out-of-range requests
    pub fn go_to(&mut self, i: usize) -> bool {
        if !self.nav.go_to(i) {
            debug!(index = i, len = self.len(), "Ignoring out-of-range card");
            return false;
        }
        self.after_navigation();
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(Step::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.step(Step::Prev)
    }

    fn step(&mut self, step: Step) -> bool {
        if !self.nav.step(step) {
            return false;
        }
        self.after_navigation();
        true
    }

    fn after_navigation(&mut self) {
        debug!(index = self.nav.index(), "Focused card");
        self.layout();
        // Punches may have changed while a card was out of focus
        for index in 0..self.cards.len() {
            self.update_tokens(index);
        }
    }

    /// Add one punch to card `index`.
    ///
    /// Full cards are left alone. Only that card's tokens are refreshed; the
    /// focused index and layout are untouched. The save runs in the
    /// background and its outcome is only logged.
    pub fn punch(&mut self, index: usize, slot: usize) -> Option<u8> {
        let id = self.cards.get(index)?.id.clone();
        let Some(value) = self.punches.punch(&id) else {
            debug!(card_id = %id, "Card already full");
            return None;
        };

        info!(card_id = %id, slot, value, "Punched");
        self.update_tokens(index);
        self.spawn_save(id, value);
        Some(value)
    }

    fn spawn_save(&self, id: CardId, value: u8) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(card_id = %id, value, "No async runtime, punch not saved");
            return;
        };
        let store = Arc::clone(&self.store);
        let retries = self.config.save_retries;
        runtime.spawn(async move {
            if let Err(e) = save_with_retry(store.as_ref(), id, value, retries).await {
                error!(error = %e, "Giving up on punch save");
            }
        });
    }

    /// Refresh the token fill states of card `index` from its punch count
    pub fn update_tokens(&mut self, index: usize) {
        if let Some(card) = self.cards.get(index) {
            let fills = token_fills(self.punches.get(&card.id));
            self.presenter.update_token_display(index, &fills);
        }
    }

    /// Classify a new viewport width; layout reruns only when the class changes
    pub fn set_viewport_width(&mut self, width: f32) {
        let viewport = ViewportClass::from_width(width, self.config.narrow_breakpoint);
        if viewport != self.viewport {
            debug!(width, ?viewport, "Viewport class changed");
            self.viewport = viewport;
            self.layout();
        }
    }

    fn render_all(&mut self) {
        let views = card_views(&self.cards, &self.punches);
        self.presenter.render_all(&views);
    }

    /// Push a transform for every card and refresh the paging controls
    pub fn layout(&mut self) {
        let transforms = layout_deck(
            self.nav.index(),
            self.cards.len(),
            self.viewport,
            &self.config.layout,
        );
        for (index, transform) in transforms.into_iter().enumerate() {
            self.presenter.set_transform(index, transform);
        }
        self.update_controls();
    }

    fn update_controls(&mut self) {
        for control in [Control::Prev, Control::Next] {
            let enabled = self.nav.control_enabled(control);
            self.presenter.set_control_enabled(control, enabled);
        }
    }

    fn apply_gesture(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::Started => self.presenter.set_rail_nudge(RailNudge {
                offset_px: 0.0,
                dragging: true,
            }),
            GestureOutcome::Nudge(offset_px) => self.presenter.set_rail_nudge(RailNudge {
                offset_px,
                dragging: true,
            }),
            GestureOutcome::Commit(step) => {
                self.presenter.set_rail_nudge(RailNudge::NEUTRAL);
                debug!(?step, "Drag committed");
                self.step(step);
            }
            GestureOutcome::SnapBack => {
                self.presenter.set_rail_nudge(RailNudge::NEUTRAL);
                self.layout();
            }
        }
    }
}

impl<P: Presenter, S: PunchStore> std::fmt::Debug for CarouselController<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("index", &self.nav.index())
            .field("cards", &self.cards.len())
            .field("viewport", &self.viewport)
            .field("dragging", &self.gesture.is_dragging())
            .finish()
    }
}
