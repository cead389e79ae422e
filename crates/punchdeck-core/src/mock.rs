//! In-memory collaborators used by the desktop app and tests.
//!
//! [`MockDataSource`] serves six demo clubs after a simulated network delay;
//! [`MockPunchStore`] records saves instead of sending them anywhere. Both
//! can be told to fail a number of times to exercise error paths.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

use crate::error::{DeckError, DeckResult};
use crate::source::{DataSource, PunchStore};
use crate::types::{Card, CardId, Gradient, PunchCounts, SaveAck};

fn club(
    id: &str,
    title: &str,
    requirement: &str,
    description: &str,
    company: &str,
    logo: &str,
    colors: (&str, &str),
) -> Card {
    Card {
        id: CardId::from(id),
        title: title.to_string(),
        requirement: requirement.to_string(),
        description: description.to_string(),
        company: company.to_string(),
        logo: logo.to_string(),
        colors: Gradient::new(colors.0, colors.1),
    }
}

/// The six demo clubs
pub fn demo_cards() -> Vec<Card> {
    vec![
        club("coffee", "Coffee Club", "Buy 9, get 1 free", "Fresh roast daily.", "RoastWorks", "\u{2615}", ("#ff9a8b", "#ff6a88")),
        club("donut", "Donut Club", "10 stamps = 1 dozen", "Glazed, filled, fritters.", "SweetLoop", "\u{1F369}", ("#f6d365", "#fda085")),
        club("tea", "Tea & Boba", "Buy 6, get 1 free", "Green, oolong, fruit teas.", "Leaf&Pearl", "\u{1F9CB}", ("#84fab0", "#8fd3f4")),
        club("smooth", "Smoothie Pass", "8 blends = 1 free", "Seasonal vitamins on tap.", "VitaBar", "\u{1F964}", ("#a18cd1", "#fbc2eb")),
        club("espresso", "Espresso VIP", "9 shots = 1 free", "Macchiatos & ristrettos.", "CremaLab", "\u{2615}", ("#30cfd0", "#330867")),
        club("soda", "Soda Refill", "8 refills = 1 free", "Crisp and fizzy.", "FizzCo", "\u{1F964}", ("#5ee7df", "#b490ca")),
    ]
}

/// Punch counts matching [`demo_cards`]
pub fn demo_punches() -> PunchCounts {
    [
        ("coffee", 5),
        ("donut", 2),
        ("tea", 7),
        ("smooth", 3),
        ("espresso", 9),
        ("soda", 6),
    ]
    .into_iter()
    .map(|(id, count)| (CardId::from(id), count))
    .collect()
}

/// Demo data source with simulated latency
#[derive(Debug, Clone)]
pub struct MockDataSource {
    cards: Vec<Card>,
    punches: PunchCounts,
    cards_latency: Duration,
    punches_latency: Duration,
    failures: Arc<AtomicU32>,
}

impl MockDataSource {
    /// Demo clubs with 500ms / 300ms simulated latency
    pub fn demo() -> Self {
        Self {
            cards: demo_cards(),
            punches: demo_punches(),
            cards_latency: Duration::from_millis(500),
            punches_latency: Duration::from_millis(300),
            failures: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Serve arbitrary data with no latency
    pub fn with_data(cards: Vec<Card>, punches: PunchCounts) -> Self {
        Self {
            cards,
            punches,
            cards_latency: Duration::ZERO,
            punches_latency: Duration::ZERO,
            failures: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_latency(mut self, cards: Duration, punches: Duration) -> Self {
        self.cards_latency = cards;
        self.punches_latency = punches;
        self
    }

    /// Fail the next `times` card loads. Clones share the counter.
    pub fn failing(self, times: u32) -> Self {
        self.failures.store(times, Ordering::SeqCst);
        self
    }

    fn take_failure(&self) -> bool {
        self.failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl DataSource for MockDataSource {
    async fn load_cards(&self) -> DeckResult<Vec<Card>> {
        tokio::time::sleep(self.cards_latency).await;
        if self.take_failure() {
            return Err(DeckError::DataLoad("club service unavailable".into()));
        }
        Ok(self.cards.clone())
    }

    async fn load_punch_counts(&self) -> DeckResult<PunchCounts> {
        tokio::time::sleep(self.punches_latency).await;
        Ok(self.punches.clone())
    }
}

/// Punch store that records every save
#[derive(Debug, Default)]
pub struct MockPunchStore {
    latency: Duration,
    failures: AtomicU32,
    saved: Mutex<Vec<SaveAck>>,
    attempts: AtomicU32,
}

impl MockPunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo store with 250ms simulated latency
    pub fn demo() -> Self {
        Self {
            latency: Duration::from_millis(250),
            ..Self::default()
        }
    }

    /// Fail the next `times` saves
    pub fn failing(self, times: u32) -> Self {
        self.failures.store(times, Ordering::SeqCst);
        self
    }

    /// Successful saves, oldest first
    pub fn saved(&self) -> Vec<SaveAck> {
        self.saved.lock().clone()
    }

    /// Every save attempt, including failed ones
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl PunchStore for MockPunchStore {
    async fn save_punch_count(&self, card_id: CardId, value: u8) -> DeckResult<SaveAck> {
        info!(card_id = %card_id, value, "Saving punches");
        self.attempts.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;

        let failed = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(DeckError::Persistence {
                card_id: card_id.to_string(),
                reason: "store unavailable".into(),
            });
        }

        let ack = SaveAck {
            ok: true,
            card_id,
            value,
        };
        self.saved.lock().push(ack.clone());
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{load_deck, save_with_retry};
    use crate::types::MAX_PUNCHES;

    #[test]
    fn test_demo_data_is_consistent() {
        let cards = demo_cards();
        let punches = demo_punches();
        assert_eq!(cards.len(), 6);
        for card in &cards {
            assert!(punches.get(&card.id) <= MAX_PUNCHES);
        }
        assert_eq!(punches.get(&CardId::from("tea")), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_source_loads_after_latency() {
        let deck = load_deck(&MockDataSource::demo()).await.unwrap();
        assert_eq!(deck.cards.len(), 6);
        assert_eq!(deck.punches.get(&CardId::from("espresso")), 9);
    }

    #[tokio::test]
    async fn test_failing_source_recovers_after_failures() {
        let source = MockDataSource::with_data(demo_cards(), demo_punches()).failing(1);
        let err = load_deck(&source).await.unwrap_err();
        assert!(matches!(err, DeckError::DataLoad(_)));

        let retry = source.clone();
        assert!(load_deck(&retry).await.is_ok());
    }

    #[tokio::test]
    async fn test_load_drops_unknown_and_rejects_duplicates() {
        let mut punches = demo_punches();
        punches.set(CardId::from("ghost"), 4);
        let deck = load_deck(&MockDataSource::with_data(demo_cards(), punches))
            .await
            .unwrap();
        assert_eq!(deck.punches.get(&CardId::from("ghost")), 0);
        assert_eq!(deck.punches.len(), 6);

        let mut cards = demo_cards();
        cards.push(cards[0].clone());
        let err = load_deck(&MockDataSource::with_data(cards, PunchCounts::new()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("duplicate card id"));
    }

    #[tokio::test]
    async fn test_save_retries_once() {
        let store = MockPunchStore::new().failing(1);
        let ack = save_with_retry(&store, CardId::from("tea"), 8, 1).await.unwrap();
        assert_eq!(ack.value, 8);
        assert_eq!(store.attempts(), 2);
        assert_eq!(store.saved().len(), 1);
    }

    #[tokio::test]
    async fn test_save_gives_up_after_retries() {
        let store = MockPunchStore::new().failing(2);
        let err = save_with_retry(&store, CardId::from("tea"), 8, 1).await.unwrap_err();
        assert!(matches!(err, DeckError::Persistence { .. }));
        assert_eq!(store.attempts(), 2);
        assert!(store.saved().is_empty());
    }
}
