//! Punch Token Component
//!
//! One of the ten punch slots on a card. Clicking a token punches the card
//! it belongs to. Neither the press nor the click reaches the card body or
//! the stage, so tapping a token never starts a rail drag.

use dioxus::prelude::*;
use punchdeck_core::TokenIcon;

pub fn token_class(filled: bool) -> &'static str {
    if filled {
        "token filled"
    } else {
        "token"
    }
}

/// Properties for the PunchToken component
#[derive(Clone, PartialEq, Props)]
pub struct PunchTokenProps {
    /// Slot position, 0-based
    pub slot: usize,
    pub icon: TokenIcon,
    pub filled: bool,
    /// Called with the slot when the token is clicked
    pub on_punch: EventHandler<usize>,
}

#[component]
pub fn PunchToken(props: PunchTokenProps) -> Element {
    let slot = props.slot;
    let path = props.icon.svg_path();

    rsx! {
        span {
            class: token_class(props.filled),
            "data-token": "{slot}",
            "aria-hidden": "true",
            onmousedown: move |evt| evt.stop_propagation(),
            ontouchstart: move |evt| evt.stop_propagation(),
            onclick: move |evt| {
                evt.stop_propagation();
                props.on_punch.call(slot);
            },
            svg {
                "viewBox": "0 0 24 24",
                fill: "currentColor",
                path { d: path }
            }
        }
    }
}
