//! Shared fixtures for carousel integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use punchdeck_core::mock::{demo_cards, demo_punches, MockPunchStore};
use punchdeck_core::{
    CardTransform, CardView, CarouselConfig, CarouselController, Control, Deck, Presenter,
    RailNudge, TokenFills,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready,
}

/// Everything a presenter has been told, as a UI would show it
#[derive(Debug, Default)]
pub struct Screen {
    pub status: Status,
    pub cards: Vec<CardView>,
    pub tokens: Vec<TokenFills>,
    pub transforms: Vec<Option<CardTransform>>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub nudge: RailNudge,
    pub full_renders: usize,
    pub transform_writes: usize,
    pub token_updates: Vec<usize>,
}

impl Screen {
    pub fn front_cards(&self) -> Vec<usize> {
        self.transforms
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_some_and(|t| t.is_front))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn filled(&self, index: usize) -> usize {
        self.tokens[index].iter().filter(|f| **f).count()
    }
}

/// Presenter that records into a shared [`Screen`]
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub screen: Rc<RefCell<Screen>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for RecordingPresenter {
    fn show_loading(&mut self) {
        self.screen.borrow_mut().status = Status::Loading;
    }

    fn show_error(&mut self, message: &str) {
        self.screen.borrow_mut().status = Status::Error(message.to_string());
    }

    fn render_all(&mut self, cards: &[CardView]) {
        let mut screen = self.screen.borrow_mut();
        screen.status = Status::Ready;
        screen.cards = cards.to_vec();
        screen.tokens = cards.iter().map(|c| c.fills).collect();
        screen.transforms = vec![None; cards.len()];
        screen.full_renders += 1;
    }

    fn update_token_display(&mut self, index: usize, fills: &TokenFills) {
        let mut screen = self.screen.borrow_mut();
        screen.tokens[index] = *fills;
        screen.token_updates.push(index);
    }

    fn set_transform(&mut self, index: usize, transform: CardTransform) {
        let mut screen = self.screen.borrow_mut();
        screen.transforms[index] = Some(transform);
        screen.transform_writes += 1;
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        let mut screen = self.screen.borrow_mut();
        match control {
            Control::Prev => screen.prev_enabled = enabled,
            Control::Next => screen.next_enabled = enabled,
        }
    }

    fn set_rail_nudge(&mut self, nudge: RailNudge) {
        self.screen.borrow_mut().nudge = nudge;
    }
}

pub type TestCarousel = CarouselController<RecordingPresenter, MockPunchStore>;

/// Six demo cards, no latency, already rendered
pub fn demo_carousel() -> (TestCarousel, Rc<RefCell<Screen>>, Arc<MockPunchStore>) {
    let presenter = RecordingPresenter::new();
    let screen = presenter.screen.clone();
    let store = Arc::new(MockPunchStore::new());
    let deck = Deck {
        cards: demo_cards(),
        punches: demo_punches(),
    };
    let carousel =
        CarouselController::with_deck(deck, presenter, store.clone(), CarouselConfig::default());
    (carousel, screen, store)
}
