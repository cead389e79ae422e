//! Core types for Punchdeck

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of punch slots on every card.
pub const MAX_PUNCHES: u8 = 10;

/// Unique identifier for a loyalty card ("coffee", "tea", ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a CardId from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Two-stop gradient painted on the card's header stripe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One loyalty-program item shown in the carousel.
///
/// Cards are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,
    /// Display title ("Coffee Club")
    pub title: String,
    /// Reward rule ("Buy 9, get 1 free")
    pub requirement: String,
    /// Short description
    pub description: String,
    /// Issuing company name
    pub company: String,
    /// Display icon (an emoji glyph)
    pub logo: String,
    /// Header stripe colors
    pub colors: Gradient,
}

/// Punch counts per card, each held in `[0, MAX_PUNCHES]`.
///
/// Missing entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PunchCounts(BTreeMap<CardId, u8>);

impl PunchCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for a card (0 when absent)
    pub fn get(&self, id: &CardId) -> u8 {
        self.0.get(id).copied().unwrap_or(0)
    }

    /// Set a count, clamped to [`MAX_PUNCHES`]
    pub fn set(&mut self, id: CardId, count: u8) {
        self.0.insert(id, count.min(MAX_PUNCHES));
    }

    /// Add one punch unless the card is full.
    ///
    /// Returns the new count, or `None` when the card was already full.
    /// The cap check and the write happen in one step.
    pub fn punch(&mut self, id: &CardId) -> Option<u8> {
        let entry = self.0.entry(id.clone()).or_insert(0);
        if *entry >= MAX_PUNCHES {
            return None;
        }
        *entry += 1;
        Some(*entry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardId, u8)> {
        self.0.iter().map(|(id, count)| (id, *count))
    }
}

impl FromIterator<(CardId, u8)> for PunchCounts {
    fn from_iter<T: IntoIterator<Item = (CardId, u8)>>(iter: T) -> Self {
        let mut counts = Self::new();
        for (id, count) in iter {
            counts.set(id, count);
        }
        counts
    }
}

/// Acknowledgment returned by a punch store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    pub ok: bool,
    pub card_id: CardId,
    pub value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_reads_zero() {
        let counts = PunchCounts::new();
        assert_eq!(counts.get(&CardId::from("coffee")), 0);
    }

    #[test]
    fn test_set_clamps_to_max() {
        let mut counts = PunchCounts::new();
        counts.set(CardId::from("tea"), 42);
        assert_eq!(counts.get(&CardId::from("tea")), MAX_PUNCHES);
    }

    #[test]
    fn test_punch_increments_until_full() {
        let mut counts = PunchCounts::new();
        let id = CardId::from("donut");
        counts.set(id.clone(), 8);

        assert_eq!(counts.punch(&id), Some(9));
        assert_eq!(counts.punch(&id), Some(10));
        assert_eq!(counts.punch(&id), None);
        assert_eq!(counts.get(&id), 10);
    }

    #[test]
    fn test_punch_creates_missing_entry() {
        let mut counts = PunchCounts::new();
        let id = CardId::from("soda");
        assert_eq!(counts.punch(&id), Some(1));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_punch_counts_json_shape() {
        let counts: PunchCounts = serde_json::from_str(r#"{"coffee":5,"tea":7}"#).unwrap();
        assert_eq!(counts.get(&CardId::from("coffee")), 5);
        assert_eq!(counts.get(&CardId::from("tea")), 7);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId::new("espresso").to_string(), "espresso");
    }
}
