//! Card view-model.
//!
//! Turns loaded cards and punch counts into the data a presenter draws:
//! card text, gradient, token icon and the fill state of the ten slots.

use serde::{Deserialize, Serialize};

use crate::types::{Card, CardId, PunchCounts, MAX_PUNCHES};

/// Fill state of a card's punch slots, in slot order
pub type TokenFills = [bool; MAX_PUNCHES as usize];

/// Slot `k` is filled iff `k < count`
pub fn token_fills(count: u8) -> TokenFills {
    std::array::from_fn(|k| k < usize::from(count))
}

/// Icon drawn in every punch slot of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenIcon {
    /// Coffee-like clubs
    Cup,
    /// Tea, boba and smoothies
    Tea,
    /// Everything else
    Ring,
}

impl TokenIcon {
    /// Icon for a card, chosen by its id
    pub fn for_card(id: &CardId) -> Self {
        match id.as_str() {
            "coffee" | "espresso" => TokenIcon::Cup,
            "tea" | "smooth" => TokenIcon::Tea,
            _ => TokenIcon::Ring,
        }
    }

    /// SVG path data on a 24x24 viewBox
    pub fn svg_path(&self) -> &'static str {
        match self {
            TokenIcon::Cup => "M18 8h2a3 3 0 0 1 0 6h-2a6 6 0 0 1-12 0V6h13a1 1 0 0 1 1 1v1Zm0 2v2h2a1 1 0 0 0 0-2h-2ZM5 20h12a1 1 0 1 1 0 2H5a1 1 0 1 1 0-2Z",
            TokenIcon::Tea => "M20 9h-2V6H4v6a6 6 0 0 0 6 6h2a6 6 0 0 0 6-6h2a3 3 0 1 0 0-6Zm0 2a1 1 0 1 1 0 2h-2v-2h2Z",
            TokenIcon::Ring => "M12 2a10 10 0 1 0 10 10A10.012 10.012 0 0 0 12 2Zm0 6a4 4 0 1 1-4 4 4.005 4.005 0 0 1 4-4Z",
        }
    }
}

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub card: Card,
    pub icon: TokenIcon,
    pub fills: TokenFills,
}

impl CardView {
    pub fn new(card: &Card, punches: u8) -> Self {
        Self {
            icon: TokenIcon::for_card(&card.id),
            fills: token_fills(punches),
            card: card.clone(),
        }
    }

    /// Number of filled slots
    pub fn punches(&self) -> usize {
        self.fills.iter().filter(|filled| **filled).count()
    }
}

/// Views for a whole deck, in deck order
pub fn card_views(cards: &[Card], punches: &PunchCounts) -> Vec<CardView> {
    cards
        .iter()
        .map(|card| CardView::new(card, punches.get(&card.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gradient;

    fn card(id: &str) -> Card {
        Card {
            id: CardId::from(id),
            title: format!("{} club", id),
            requirement: "Buy 9, get 1 free".into(),
            description: String::new(),
            company: "Acme".into(),
            logo: "*".into(),
            colors: Gradient::new("#000", "#fff"),
        }
    }

    #[test]
    fn test_token_fills() {
        assert_eq!(token_fills(0), [false; 10]);
        assert_eq!(token_fills(10), [true; 10]);

        let fills = token_fills(3);
        assert!(fills[..3].iter().all(|f| *f));
        assert!(fills[3..].iter().all(|f| !*f));
    }

    #[test]
    fn test_icon_categories() {
        assert_eq!(TokenIcon::for_card(&"coffee".into()), TokenIcon::Cup);
        assert_eq!(TokenIcon::for_card(&"espresso".into()), TokenIcon::Cup);
        assert_eq!(TokenIcon::for_card(&"tea".into()), TokenIcon::Tea);
        assert_eq!(TokenIcon::for_card(&"smooth".into()), TokenIcon::Tea);
        assert_eq!(TokenIcon::for_card(&"donut".into()), TokenIcon::Ring);
        assert_eq!(TokenIcon::for_card(&"soda".into()), TokenIcon::Ring);
    }

    #[test]
    fn test_card_views_default_missing_to_zero() {
        let cards = vec![card("coffee"), card("donut")];
        let punches: PunchCounts = [(CardId::from("coffee"), 4)].into_iter().collect();

        let views = card_views(&cards, &punches);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].punches(), 4);
        assert_eq!(views[1].punches(), 0);
        assert_eq!(views[1].icon, TokenIcon::Ring);
    }
}
