use dioxus::prelude::*;

use crate::components::CarouselStage;
use crate::context::{boot, Carousel};
use crate::presenter::DeckView;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the carousel context, and starts loading the
/// deck on mount.
#[component]
pub fn App() -> Element {
    let carousel: Signal<Option<Carousel>> = use_signal(|| None);
    let view: Signal<DeckView> = use_signal(DeckView::default);
    let width: Signal<Option<f32>> = use_signal(|| None);

    use_context_provider(|| carousel);
    use_context_provider(|| view);
    use_context_provider(|| width);

    // Load the deck on mount
    use_effect(move || {
        spawn(boot(carousel, view, width));
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        CarouselStage {}
    }
}
