//! External collaborators: where cards and punch counts come from and go to.

use std::collections::HashSet;
use std::future::Future;

use tracing::{debug, info, warn};

use crate::error::{DeckError, DeckResult};
use crate::types::{Card, CardId, PunchCounts, SaveAck, MAX_PUNCHES};

/// Supplies the deck at startup
pub trait DataSource {
    /// Ordered list of cards
    fn load_cards(&self) -> impl Future<Output = DeckResult<Vec<Card>>> + Send;

    /// Punch count per card id
    fn load_punch_counts(&self) -> impl Future<Output = DeckResult<PunchCounts>> + Send;
}

/// Receives punch counts after every successful punch
pub trait PunchStore: Send + Sync + 'static {
    fn save_punch_count(
        &self,
        card_id: CardId,
        value: u8,
    ) -> impl Future<Output = DeckResult<SaveAck>> + Send;
}

/// Cards plus their punch counts, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub punches: PunchCounts,
}

/// Load cards and punch counts concurrently and merge them.
///
/// Either load failing fails the whole deck with [`DeckError::DataLoad`].
/// Punch entries for unknown cards are dropped and counts are clamped to
/// [`MAX_PUNCHES`].
pub async fn load_deck<D: DataSource>(source: &D) -> DeckResult<Deck> {
    let (cards, raw_punches) = tokio::try_join!(source.load_cards(), source.load_punch_counts())
        .map_err(|e| match e {
            DeckError::DataLoad(_) => e,
            other => DeckError::DataLoad(other.to_string()),
        })?;

    let mut seen = HashSet::with_capacity(cards.len());
    for card in &cards {
        if !seen.insert(&card.id) {
            return Err(DeckError::DataLoad(format!("duplicate card id: {}", card.id)));
        }
    }

    let punches: PunchCounts = raw_punches
        .iter()
        .filter(|(id, _)| {
            let known = seen.contains(id);
            if !known {
                warn!(card_id = %id, "Dropping punches for unknown card");
            }
            known
        })
        .map(|(id, count)| {
            if count > MAX_PUNCHES {
                warn!(card_id = %id, count, "Clamping punch count");
            }
            (id.clone(), count)
        })
        .collect();

    info!(cards = cards.len(), punched = punches.len(), "Deck loaded");
    debug!(?punches, "Initial punch counts");
    Ok(Deck { cards, punches })
}

/// Save a punch count, retrying up to `retries` extra times on failure.
pub async fn save_with_retry<S: PunchStore>(
    store: &S,
    card_id: CardId,
    value: u8,
    retries: u32,
) -> DeckResult<SaveAck> {
    let mut attempt = 0;
    loop {
        match store.save_punch_count(card_id.clone(), value).await {
            Ok(ack) if ack.ok => {
                debug!(card_id = %ack.card_id, value = ack.value, "Punches saved");
                return Ok(ack);
            }
            Ok(_) if attempt < retries => {
                warn!(card_id = %card_id, attempt, "Punch save rejected, retrying");
            }
            Err(e) if attempt < retries => {
                warn!(card_id = %card_id, attempt, error = %e, "Punch save failed, retrying");
            }
            Ok(_) => {
                return Err(DeckError::Persistence {
                    card_id: card_id.to_string(),
                    reason: "store rejected the value".into(),
                });
            }
            Err(e) => {
                return Err(DeckError::Persistence {
                    card_id: card_id.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        attempt += 1;
    }
}
