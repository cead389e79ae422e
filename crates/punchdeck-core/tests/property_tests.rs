//! Property-based tests for layout, navigation and punches
//!
//! Uses proptest to verify the carousel invariants hold for any input.

mod common;

use std::time::Instant;

use proptest::prelude::*;
use punchdeck_core::{
    card_transform, layout_deck, CardId, InputEvent, LayoutConfig, Navigator, PunchCounts,
    ViewportClass, MAX_PUNCHES,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn viewport_strategy() -> impl Strategy<Value = ViewportClass> {
    prop_oneof![Just(ViewportClass::Narrow), Just(ViewportClass::Wide)]
}

/// Operations a user can perform on the carousel
#[derive(Debug, Clone)]
enum NavOp {
    GoTo(usize),
    Next,
    Prev,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..20usize).prop_map(NavOp::GoTo),
            1 => Just(NavOp::Next),
            1 => Just(NavOp::Prev),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Layout is pure: recomputing gives identical transforms
    #[test]
    fn layout_is_deterministic(
        focused in 0..50usize,
        card in 0..50usize,
        viewport in viewport_strategy(),
    ) {
        let config = LayoutConfig::default();
        let a = card_transform(focused, card, viewport, &config);
        let b = card_transform(focused, card, viewport, &config);
        prop_assert_eq!(a, b);
    }

    /// Scale and opacity stay within their floors; depth never exceeds its cap
    #[test]
    fn layout_respects_floors(
        focused in 0..50usize,
        card in 0..50usize,
        viewport in viewport_strategy(),
    ) {
        let config = LayoutConfig::default();
        let t = card_transform(focused, card, viewport, &config);
        prop_assert!(t.scale >= 0.65 - 1e-6);
        prop_assert!(t.scale <= 1.0);
        prop_assert!(t.opacity >= 0.2 - 1e-6);
        prop_assert!(t.opacity <= 1.0);
        prop_assert!(t.z <= 0.0);
        prop_assert!(t.z >= -config.depth_cap);
        if card == focused {
            prop_assert_eq!(t.scale, 1.0);
            prop_assert!(t.is_front);
        }
    }

    /// Side cards sit on the side of the front card they belong to
    #[test]
    fn layout_preserves_order(focused in 0..20usize, len in 1..20usize) {
        let focused = focused % len;
        let transforms = layout_deck(focused, len, ViewportClass::Wide, &LayoutConfig::default());
        for pair in transforms.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
        prop_assert_eq!(transforms.iter().filter(|t| t.is_front).count(), 1);
    }

    /// The focused index never leaves [0, len)
    #[test]
    fn navigation_stays_in_bounds(len in 1..12usize, ops in nav_ops_strategy(50)) {
        let mut nav = Navigator::new(len);
        for op in ops {
            let before = nav.index();
            match op {
                NavOp::GoTo(i) => {
                    let accepted = nav.go_to(i);
                    if i < len {
                        prop_assert!(accepted);
                        prop_assert_eq!(nav.index(), i);
                    } else {
                        prop_assert!(!accepted);
                        prop_assert_eq!(nav.index(), before);
                    }
                }
                NavOp::Next => { nav.next(); }
                NavOp::Prev => { nav.prev(); }
            }
            prop_assert!(nav.index() < len);
            prop_assert_eq!(nav.can_prev(), nav.index() > 0);
            prop_assert_eq!(nav.can_next(), nav.index() < len - 1);
        }
    }

    /// No number of punches takes a card past the cap
    #[test]
    fn punches_never_exceed_cap(start in 0..=MAX_PUNCHES, taps in 0..40usize) {
        let mut counts = PunchCounts::new();
        let id = CardId::from("coffee");
        counts.set(id.clone(), start);
        for _ in 0..taps {
            counts.punch(&id);
            prop_assert!(counts.get(&id) <= MAX_PUNCHES);
        }
        let expected = (usize::from(start) + taps).min(usize::from(MAX_PUNCHES));
        prop_assert_eq!(usize::from(counts.get(&id)), expected);
    }

    /// Token taps change exactly one card and never move focus
    #[test]
    fn token_taps_touch_one_card(
        focus in 0..6usize,
        taps in prop::collection::vec((0..6usize, 0..10usize), 1..30),
    ) {
        let (mut carousel, _, _) = common::demo_carousel();
        carousel.go_to(focus);
        let now = Instant::now();

        for (index, slot) in taps {
            let before: Vec<u8> = carousel.cards().iter().map(|c| carousel.punches(&c.id)).collect();
            carousel.handle(InputEvent::Token { index, slot }, now);
            let after: Vec<u8> = carousel.cards().iter().map(|c| carousel.punches(&c.id)).collect();

            for (i, (b, a)) in before.iter().zip(&after).enumerate() {
                if i == index && *b < MAX_PUNCHES {
                    prop_assert_eq!(*a, b + 1);
                } else {
                    prop_assert_eq!(a, b);
                }
            }
            prop_assert_eq!(carousel.index(), focus);
        }
    }
}
