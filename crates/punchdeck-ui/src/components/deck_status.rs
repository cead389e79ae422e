//! Deck Status Panel
//!
//! Shown in place of the rail while the deck loads, or when it failed to.

use dioxus::prelude::*;

/// Loading state of the deck
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum DeckStatus {
    /// Fetches in flight
    #[default]
    Loading,
    /// Fetch failed with this message
    Failed(String),
    /// Deck rendered
    Ready,
}

impl DeckStatus {
    /// Returns the display label for this state
    pub fn label(&self) -> &str {
        match self {
            DeckStatus::Loading => "Loading clubs\u{2026}",
            DeckStatus::Failed(message) => message.as_str(),
            DeckStatus::Ready => "",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DeckStatus::Ready)
    }
}

/// Properties for the DeckStatusPanel component
#[derive(Clone, PartialEq, Props)]
pub struct DeckStatusPanelProps {
    pub status: DeckStatus,
    /// Offered when loading failed
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

/// Loading indicator or error message with a retry button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DeckStatusPanel {
///         status: view.status.clone(),
///         on_retry: move |_| reload(),
///     }
/// }
/// ```
#[component]
pub fn DeckStatusPanel(props: DeckStatusPanelProps) -> Element {
    if props.status.is_ready() {
        return VNode::empty();
    }
    let failed = matches!(props.status, DeckStatus::Failed(_));
    let label = props.status.label().to_string();

    rsx! {
        div {
            class: if failed { "deck-status failed" } else { "deck-status" },
            role: if failed { "alert" } else { "status" },
            span { class: "deck-status__label", "{label}" }
            if failed {
                if let Some(on_retry) = props.on_retry {
                    button {
                        class: "btn-retry",
                        r#type: "button",
                        onclick: move |_| on_retry.call(()),
                        "Try again"
                    }
                }
            }
        }
    }
}
