//! Card Face Component
//!
//! Draws one loyalty card: gradient stripe with the title, requirement,
//! company badge, description and the row of ten punch tokens. Its position
//! in the pyramid comes from a [`CardTransform`] computed elsewhere.

use dioxus::prelude::*;
use punchdeck_core::{CardTransform, CardView, Gradient, NavKey, TokenFills};

use super::PunchToken;

/// Inline style placing a card in the pyramid
pub fn card_style(transform: Option<&CardTransform>) -> String {
    match transform {
        Some(t) => format!(
            "transform: {}; z-index: {}; opacity: {};",
            t.to_css(),
            t.z_index,
            t.opacity
        ),
        // Not laid out yet: keep it invisible rather than stacked at the origin
        None => "opacity: 0;".to_string(),
    }
}

/// Custom properties consumed by the `.stripe` gradient rule
pub fn stripe_style(colors: &Gradient) -> String {
    format!("--c1:{};--c2:{}", colors.from, colors.to)
}

/// Properties for the CardFace component
#[derive(Clone, PartialEq, Props)]
pub struct CardFaceProps {
    /// Position in the deck
    pub index: usize,
    pub view: CardView,
    /// Current token fill states; may be newer than `view.fills`
    pub fills: TokenFills,
    /// None until the first layout pass
    #[props(!optional)]
    pub transform: Option<CardTransform>,
    /// Card body clicked
    pub on_select: EventHandler<usize>,
    /// Key pressed while the card has focus
    pub on_key: EventHandler<(usize, NavKey)>,
    /// Token clicked: (card index, slot)
    pub on_punch: EventHandler<(usize, usize)>,
}

/// A single focusable card in the rail
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (index, view) in views.iter().enumerate() {
///         CardFace {
///             key: "{view.card.id}",
///             index,
///             view: view.clone(),
///             fills: tokens[index],
///             transform: transforms[index],
///             on_select: move |i| send(InputEvent::CardBody(i)),
///             on_key: move |(i, key)| send(InputEvent::CardKey(i, key)),
///             on_punch: move |(index, slot)| send(InputEvent::Token { index, slot }),
///         }
///     }
/// }
/// ```
#[component]
pub fn CardFace(props: CardFaceProps) -> Element {
    let index = props.index;
    let card = &props.view.card;
    let icon = props.view.icon;
    let is_front = props.transform.is_some_and(|t| t.is_front);
    let style = card_style(props.transform.as_ref());
    let stripe = stripe_style(&card.colors);

    let on_select = props.on_select;
    let on_key = props.on_key;
    let on_punch = props.on_punch;

    rsx! {
        article {
            class: if is_front { "card is-front" } else { "card" },
            tabindex: "0",
            role: "button",
            "aria-label": "{card.title}",
            "aria-selected": if is_front { "true" } else { "false" },
            "data-id": "{card.id}",
            style: "{style}",
            onclick: move |_| on_select.call(index),
            onkeydown: move |evt: KeyboardEvent| {
                let key = NavKey::from_key_name(&evt.key().to_string());
                if key.is_confirm() {
                    evt.prevent_default();
                }
                on_key.call((index, key));
            },

            div { class: "stripe", style: "{stripe}",
                div { class: "title", "{card.title}" }
            }
            div { class: "body",
                div { class: "meta",
                    div { class: "req", "{card.requirement}" }
                    div { class: "brand",
                        div { class: "logo", "aria-hidden": "true", "{card.logo}" }
                        div { class: "company", "{card.company}" }
                    }
                }
                p { "{card.description}" }
                div { class: "punches", "aria-label": "punch row",
                    for (slot, filled) in props.fills.iter().copied().enumerate() {
                        PunchToken {
                            key: "{slot}",
                            slot,
                            icon,
                            filled,
                            on_punch: move |slot| on_punch.call((index, slot)),
                        }
                    }
                }
            }
        }
    }
}
