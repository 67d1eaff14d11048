//! Spaces section: expandable cards about the center.

use connecting_minds_ui::ExpandableCardGallery;
use dioxus::prelude::*;

use crate::context::use_site_settings;

/// Gallery of the center's cards. Each mount owns its own active card.
#[component]
pub fn ExpandableCardDemo() -> Element {
    let settings = use_site_settings();

    rsx! {
        ExpandableCardGallery { cards: settings.content.cards }
    }
}
