//! Expandable Card Gallery
//!
//! A list of cards. Clicking a card expands it into a full-screen overlay
//! with its image, copy, CTA link and detail text. The overlay closes on
//! Escape, on a press outside the panel, or via the back/close controls.
//!
//! List rows and overlay elements carry the same transition keys
//! (`data-layout-id` and `view-transition-name`) so the overlay reads as the
//! row growing into place.

use connecting_minds_core::{Card, CardRow, DetailContent, Gallery, GalleryEvent, OverlayView};
use dioxus::prelude::*;

use crate::components::{BackButton, Button, ButtonLink, ButtonVariant, CloseButton};
use crate::host::{DomHost, LISTENER_CLOSED};

fn transition_style(key: &str) -> String {
    format!("view-transition-name: {};", key)
}

/// Expandable card gallery
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ExpandableCardGallery { cards: SiteContent::builtin().cards }
/// }
/// ```
#[component]
pub fn ExpandableCardGallery(
    /// Cards in display order
    cards: Vec<Card>,
) -> Element {
    let mut gallery = use_signal(|| Gallery::new(cards.clone(), DomHost::new()));
    let is_open = use_memo(move || gallery.read().active_index().is_some());

    // Follow later changes to the `cards` prop. Replacing the list closes
    // any open card.
    use_effect(use_reactive!(|cards| {
        if gallery.peek().cards() != cards.as_slice() {
            gallery.write().set_cards(cards);
        }
    }));

    // Feed Escape presses from the window listener while the overlay is up.
    // The loop ends when the host removes the listener.
    use_effect(move || {
        if !is_open() {
            return;
        }
        let Some(mut listener) = gallery.peek().host().take_listener() else {
            return;
        };
        spawn(async move {
            while let Ok(key) = listener.recv::<String>().await {
                if key == LISTENER_CLOSED {
                    break;
                }
                gallery.write().handle(GalleryEvent::KeyDown(key));
            }
        });
    });

    let view = gallery.read().view();
    let active_index = view.overlay.as_ref().map(|o| o.index);

    rsx! {
        if let Some(overlay) = view.overlay {
            div { class: "cards-backdrop" }
            ExpandedCard {
                overlay: overlay,
                on_event: move |event| {
                    gallery.write().handle(event);
                },
            }
        }

        ul { class: "cards-list",
            for row in view.rows {
                CardListRow {
                    key: "{row.keys.card}",
                    is_active: Some(row.index) == active_index,
                    row: row.clone(),
                    on_activate: move |index| {
                        gallery.write().handle(GalleryEvent::Activate(index));
                    },
                }
            }
        }
    }
}

/// One collapsed card in the list
#[component]
fn CardListRow(row: CardRow, is_active: bool, on_activate: EventHandler<usize>) -> Element {
    let index = row.index;
    // While expanded, the overlay owns the transition names.
    let named = |key: &str| (!is_active).then(|| transition_style(key));

    rsx! {
        li {
            class: "card-row",
            "data-layout-id": "{row.keys.card}",
            style: named(&row.keys.card),
            onclick: move |_| on_activate.call(index),

            div { class: "card-row__main",
                div {
                    class: "card-row__thumb",
                    "data-layout-id": "{row.keys.image}",
                    style: named(&row.keys.image),
                    img {
                        src: "{row.image_ref}",
                        alt: "{row.title}",
                        width: "100",
                        height: "100",
                    }
                }
                div { class: "card-row__text",
                    h3 {
                        class: "card-row__title",
                        "data-layout-id": "{row.keys.title}",
                        style: named(&row.keys.title),
                        "{row.title}"
                    }
                    p {
                        class: "card-row__description",
                        "data-layout-id": "{row.keys.description}",
                        style: named(&row.keys.description),
                        "{row.description}"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Pill,
                layout_id: row.keys.button.clone(),
                onclick: move |_| on_activate.call(index),
                "{row.cta_label}"
            }
        }
    }
}

/// Full-screen detail view of the active card
#[component]
fn ExpandedCard(overlay: OverlayView, on_event: EventHandler<GalleryEvent>) -> Element {
    rsx! {
        div {
            class: "card-overlay",
            onmousedown: move |_| on_event.call(GalleryEvent::PointerDown { inside_panel: false }),

            div {
                class: "card-overlay__controls",
                onmousedown: move |evt| evt.stop_propagation(),
                BackButton { onclick: move |_| on_event.call(GalleryEvent::BackControl) }
                CloseButton { onclick: move |_| on_event.call(GalleryEvent::CloseControl) }
            }

            div {
                class: "card-panel",
                "data-layout-id": "{overlay.keys.card}",
                style: transition_style(&overlay.keys.card),
                onmousedown: move |evt| {
                    evt.stop_propagation();
                    on_event.call(GalleryEvent::PointerDown { inside_panel: true });
                },

                div {
                    class: "card-panel__image",
                    "data-layout-id": "{overlay.keys.image}",
                    style: transition_style(&overlay.keys.image),
                    img {
                        src: "{overlay.image_ref}",
                        alt: "{overlay.title}",
                        width: "500",
                        height: "500",
                    }
                }

                div { class: "card-panel__header",
                    div {
                        h2 {
                            class: "card-panel__title",
                            "data-layout-id": "{overlay.keys.title}",
                            style: transition_style(&overlay.keys.title),
                            "{overlay.title}"
                        }
                        p {
                            class: "card-panel__description",
                            "data-layout-id": "{overlay.keys.description}",
                            style: transition_style(&overlay.keys.description),
                            "{overlay.description}"
                        }
                    }

                    ButtonLink {
                        href: overlay.cta_target.clone(),
                        layout_id: overlay.keys.button.clone(),
                        style: transition_style(&overlay.keys.button),
                        "{overlay.cta_label}"
                    }
                }

                div { class: "card-panel__detail",
                    DetailBody { content: overlay.detail.clone() }
                }
            }
        }
    }
}

/// Detail paragraphs; lines within a paragraph are set a blank line apart.
#[component]
fn DetailBody(content: DetailContent) -> Element {
    rsx! {
        for (p_index, paragraph) in content.paragraphs.iter().enumerate() {
            p { key: "{p_index}",
                for (i, line) in paragraph.lines.iter().enumerate() {
                    if i > 0 {
                        br {}
                        br {}
                    }
                    "{line}"
                }
            }
        }
    }
}
