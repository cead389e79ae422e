//! Carousel stage.
//!
//! Translates Dioxus events into [`InputEvent`]s for the controller and
//! draws whatever the controller last presented. Mouse and touch both go
//! through [`PointerEvent`] so the controller sees one kind of gesture.

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use punchdeck_core::{Control, Disposition, InputEvent, NavKey, PointerEvent, PointerPhase};
use punchdeck_ui::{CardFace, DeckStatusPanel, NavButton};

use crate::context::{boot, send, use_carousel, use_deck_view, use_stage_width};

fn touch_xs(evt: &TouchEvent) -> Vec<f64> {
    evt.touches()
        .iter()
        .map(|touch| touch.client_coordinates().x)
        .collect()
}

#[component]
pub fn CarouselStage() -> Element {
    let carousel = use_carousel();
    let view = use_deck_view();
    let mut width = use_stage_width();
    let deck = view.read();
    let rail_style = deck.rail_style();

    let on_pointer = move |event: PointerEvent| send(carousel, InputEvent::Pointer(event));
    let on_touch = move |phase: PointerPhase, evt: TouchEvent| {
        if let Some(event) = PointerEvent::touch(phase, &touch_xs(&evt)) {
            if on_pointer(event) == Disposition::PreventDefault {
                evt.prevent_default();
            }
        }
    };

    rsx! {
        div {
            class: "stage",
            tabindex: "0",
            autofocus: true,
            // Arrow keys must work before the user clicks anything
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!(error = ?e, "Could not focus carousel stage");
                }
            },
            onresize: move |evt: ResizeEvent| {
                if let Ok(size) = evt.get_border_box_size() {
                    let measured = size.width as f32;
                    width.set(Some(measured));
                    send(carousel, InputEvent::Viewport(measured));
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = NavKey::from_key_name(&evt.key().to_string());
                send(carousel, InputEvent::Key(key));
            },
            onwheel: move |evt: WheelEvent| {
                let delta = evt.delta().strip_units();
                send(carousel, InputEvent::Wheel { dx: delta.x, dy: delta.y });
            },
            onmousedown: move |evt: MouseEvent| {
                if evt.trigger_button() == Some(MouseButton::Primary) {
                    on_pointer(PointerEvent::mouse(PointerPhase::Start, evt.client_coordinates().x));
                }
            },
            onmousemove: move |evt: MouseEvent| {
                on_pointer(PointerEvent::mouse(PointerPhase::Move, evt.client_coordinates().x));
            },
            onmouseup: move |evt: MouseEvent| {
                on_pointer(PointerEvent::mouse(PointerPhase::End, evt.client_coordinates().x));
            },
            onmouseleave: move |_| {
                send(carousel, InputEvent::PointerLeave);
            },
            ontouchstart: move |evt| on_touch(PointerPhase::Start, evt),
            ontouchmove: move |evt| on_touch(PointerPhase::Move, evt),
            ontouchend: move |evt| on_touch(PointerPhase::End, evt),
            ontouchcancel: move |_| {
                send(carousel, InputEvent::PointerLeave);
            },

            DeckStatusPanel {
                status: deck.status.clone(),
                on_retry: move |_| {
                    spawn(boot(carousel, view, width));
                },
            }

            if deck.status.is_ready() {
                NavButton {
                    control: Control::Prev,
                    disabled: !deck.prev_enabled,
                    onclick: move |control| {
                        send(carousel, InputEvent::Control(control));
                    },
                }
                div { class: "viewport",
                    div { class: "rail", style: "{rail_style}",
                        for (index, card_view) in deck.cards.iter().enumerate() {
                            CardFace {
                                key: "{card_view.card.id}",
                                index,
                                view: card_view.clone(),
                                fills: deck.tokens[index],
                                transform: deck.transforms[index],
                                on_select: move |i| {
                                    send(carousel, InputEvent::CardBody(i));
                                },
                                on_key: move |(i, key)| {
                                    send(carousel, InputEvent::CardKey(i, key));
                                },
                                on_punch: move |(index, slot)| {
                                    send(carousel, InputEvent::Token { index, slot });
                                },
                            }
                        }
                    }
                }
                NavButton {
                    control: Control::Next,
                    disabled: !deck.next_enabled,
                    onclick: move |control| {
                        send(carousel, InputEvent::Control(control));
                    },
                }
            }
        }
    }
}
