//! Dioxus binding of the presentation port.
//!
//! The controller writes into a [`DeckView`] signal; components read it and
//! re-render. Token updates only touch one card's fill row, so only that
//! card's props change.

use dioxus::prelude::*;
use punchdeck_core::{CardTransform, CardView, Control, Presenter, RailNudge, TokenFills};
use punchdeck_ui::DeckStatus;

/// Snapshot of everything on screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckView {
    pub status: DeckStatus,
    pub cards: Vec<CardView>,
    pub tokens: Vec<TokenFills>,
    pub transforms: Vec<Option<CardTransform>>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub nudge: RailNudge,
}

impl DeckView {
    /// Inline style for the card rail
    pub fn rail_style(&self) -> String {
        let transition = if self.nudge.dragging {
            "transform .08s ease"
        } else {
            "transform .25s ease"
        };
        format!(
            "transform: translateX({}px); transition: {};",
            self.nudge.offset_px, transition
        )
    }
}

/// Presenter writing into a [`DeckView`] signal
pub struct SignalPresenter {
    view: Signal<DeckView>,
}

impl SignalPresenter {
    pub fn new(view: Signal<DeckView>) -> Self {
        Self { view }
    }
}

impl Presenter for SignalPresenter {
    fn show_loading(&mut self) {
        self.view.write().status = DeckStatus::Loading;
    }

    fn show_error(&mut self, message: &str) {
        self.view.write().status = DeckStatus::Failed(message.to_string());
    }

    fn render_all(&mut self, cards: &[CardView]) {
        let mut view = self.view.write();
        view.tokens = cards.iter().map(|card| card.fills).collect();
        view.transforms = vec![None; cards.len()];
        view.cards = cards.to_vec();
        view.status = DeckStatus::Ready;
    }

    fn update_token_display(&mut self, index: usize, fills: &TokenFills) {
        let mut view = self.view.write();
        if let Some(slot) = view.tokens.get_mut(index) {
            *slot = *fills;
        }
    }

    fn set_transform(&mut self, index: usize, transform: CardTransform) {
        let mut view = self.view.write();
        if let Some(slot) = view.transforms.get_mut(index) {
            *slot = Some(transform);
        }
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        let mut view = self.view.write();
        match control {
            Control::Prev => view.prev_enabled = enabled,
            Control::Next => view.next_enabled = enabled,
        }
    }

    fn set_rail_nudge(&mut self, nudge: RailNudge) {
        self.view.write().nudge = nudge;
    }
}
