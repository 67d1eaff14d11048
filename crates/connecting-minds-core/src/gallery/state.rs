//! Expandable card gallery state machine.

use crate::content::Card;

use super::host::OverlayHost;
use super::identity::{InstanceId, TransitionKeys};
use super::view::{CardRow, GalleryView, OverlayView};

/// Key value that dismisses the overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Why the overlay was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    EscapeKey,
    OutsideClick,
    CloseControl,
    BackControl,
}

/// UI input routed into the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A list row or its CTA button was clicked.
    Activate(usize),
    /// A global key-down, carrying the key name.
    KeyDown(String),
    /// Pointer pressed somewhere on the page while the overlay is up.
    PointerDown { inside_panel: bool },
    /// Close (X) control in the overlay.
    CloseControl,
    /// Back arrow in the overlay.
    BackControl,
}

/// Outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened { index: usize },
    Replaced { from: usize, to: usize },
    Dismissed { index: usize, reason: DismissReason },
    Unchanged,
}

/// A list of cards with at most one expanded.
///
/// While a card is active the gallery holds a scroll lock and the dismiss
/// listeners from its host. Both are released whenever the selection goes
/// back to none, including when the gallery is dropped.
pub struct Gallery<H: OverlayHost> {
    cards: Vec<Card>,
    instance: InstanceId,
    active: Option<usize>,
    host: H,
}

impl<H: OverlayHost> Gallery<H> {
    pub fn new(cards: Vec<Card>, host: H) -> Self {
        Self {
            cards,
            instance: InstanceId::next(),
            active: None,
            host,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Swap in a new card list. An open card is closed first, since its
    /// index may not point at the same card afterwards. Returns false when
    /// the list is unchanged.
    pub fn set_cards(&mut self, cards: Vec<Card>) -> bool {
        if self.cards == cards {
            return false;
        }
        if self.active.take().is_some() {
            self.close_session();
        }
        tracing::debug!(instance = %self.instance, count = cards.len(), "Gallery cards replaced");
        self.cards = cards;
        true
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn active(&self) -> Option<&Card> {
        self.active.map(|i| &self.cards[i])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.active.is_some()
    }

    /// Expand the card at `index`, replacing any active card.
    pub fn activate(&mut self, index: usize) -> Transition {
        if index >= self.cards.len() {
            tracing::warn!(index, len = self.cards.len(), "Ignoring activation of unknown card");
            return Transition::Unchanged;
        }

        let transition = match self.active {
            Some(current) if current == index => return Transition::Unchanged,
            Some(current) => Transition::Replaced { from: current, to: index },
            None => {
                self.open_session();
                Transition::Opened { index }
            }
        };

        self.active = Some(index);
        tracing::debug!(
            instance = %self.instance,
            card = %self.cards[index].title,
            ?transition,
            "Card activated"
        );
        transition
    }

    /// Expand the card with the given title, if there is one.
    pub fn activate_by_title(&mut self, title: &str) -> Option<Transition> {
        let title = title.trim();
        let index = self.cards.iter().position(|c| c.title == title)?;
        Some(self.activate(index))
    }

    /// Collapse the active card. No-op when nothing is active.
    pub fn dismiss(&mut self, reason: DismissReason) -> Transition {
        let Some(index) = self.active.take() else {
            return Transition::Unchanged;
        };

        self.close_session();
        tracing::debug!(
            instance = %self.instance,
            card = %self.cards[index].title,
            ?reason,
            "Card dismissed"
        );
        Transition::Dismissed { index, reason }
    }

    pub fn handle(&mut self, event: GalleryEvent) -> Transition {
        match event {
            GalleryEvent::Activate(index) => self.activate(index),
            GalleryEvent::KeyDown(key) if key == ESCAPE_KEY => self.dismiss(DismissReason::EscapeKey),
            GalleryEvent::KeyDown(_) => Transition::Unchanged,
            GalleryEvent::PointerDown { inside_panel: false } => {
                self.dismiss(DismissReason::OutsideClick)
            }
            GalleryEvent::PointerDown { inside_panel: true } => Transition::Unchanged,
            GalleryEvent::CloseControl => self.dismiss(DismissReason::CloseControl),
            GalleryEvent::BackControl => self.dismiss(DismissReason::BackControl),
        }
    }

    pub fn keys_for(&self, index: usize) -> Option<TransitionKeys> {
        self.cards
            .get(index)
            .map(|c| TransitionKeys::new(&c.title, self.instance))
    }

    /// Build the render model. The active card's detail producer runs here
    /// and nowhere else.
    pub fn view(&self) -> GalleryView {
        let rows = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| CardRow {
                index,
                title: card.title.clone(),
                description: card.description.clone(),
                image_ref: card.image_ref.clone(),
                cta_label: card.cta_label.clone(),
                keys: TransitionKeys::new(&card.title, self.instance),
            })
            .collect();

        let overlay = self.active.map(|index| {
            let card = &self.cards[index];
            OverlayView {
                index,
                title: card.title.clone(),
                description: card.description.clone(),
                image_ref: card.image_ref.clone(),
                cta_label: card.cta_label.clone(),
                cta_target: card.cta_target.clone(),
                detail: card.produce_detail(),
                keys: TransitionKeys::new(&card.title, self.instance),
            }
        });

        GalleryView { rows, overlay }
    }

    fn open_session(&self) {
        self.host.lock_scroll();
        self.host.attach_dismiss_listeners(self.instance);
    }

    fn close_session(&self) {
        self.host.detach_dismiss_listeners(self.instance);
        self.host.unlock_scroll();
    }
}

impl<H: OverlayHost> Drop for Gallery<H> {
    fn drop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!(instance = %self.instance, "Gallery dropped while open, releasing overlay");
            self.close_session();
        }
    }
}
