//! Paging Buttons
//!
//! The previous / next controls beside the card rail. Each is disabled
//! whenever paging in its direction would do nothing.

use dioxus::prelude::*;
use punchdeck_core::Control;

/// CSS class for a paging control
pub fn control_class(control: Control) -> &'static str {
    match control {
        Control::Prev => "nav-btn nav-prev",
        Control::Next => "nav-btn nav-next",
    }
}

/// Accessible label for a paging control
pub fn control_label(control: Control) -> &'static str {
    match control {
        Control::Prev => "Previous card",
        Control::Next => "Next card",
    }
}

/// Arrow glyph shown inside the control
pub fn control_glyph(control: Control) -> &'static str {
    match control {
        Control::Prev => "\u{2039}",
        Control::Next => "\u{203A}",
    }
}

/// Properties for the NavButton component
#[derive(Clone, PartialEq, Props)]
pub struct NavButtonProps {
    /// Which direction this button pages
    pub control: Control,
    /// Whether paging in this direction is currently possible
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler
    pub onclick: EventHandler<Control>,
}

/// Previous / next button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NavButton {
///         control: Control::Next,
///         disabled: !view.next_enabled,
///         onclick: move |control| send(InputEvent::Control(control)),
///     }
/// }
/// ```
#[component]
pub fn NavButton(props: NavButtonProps) -> Element {
    let control = props.control;
    let glyph = control_glyph(control);

    rsx! {
        button {
            class: control_class(control),
            r#type: "button",
            disabled: props.disabled,
            "aria-label": control_label(control),
            // Keep the press from starting a rail drag
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |evt| {
                evt.stop_propagation();
                props.onclick.call(control);
            },
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_classes() {
        assert_eq!(control_class(Control::Prev), "nav-btn nav-prev");
        assert_eq!(control_class(Control::Next), "nav-btn nav-next");
    }

    #[test]
    fn control_labels_differ() {
        assert_ne!(control_label(Control::Prev), control_label(Control::Next));
        assert_ne!(control_glyph(Control::Prev), control_glyph(Control::Next));
    }
}
