//! Shared transition identities.
//!
//! A card's list row and its expanded overlay render the same elements
//! (container, image, title, description, button). Each pair shares a key so
//! the animation layer can morph one into the other. Keys are scoped to the
//! gallery instance so two galleries on one page never collide.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Unique id of a gallery instance within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Element of a card that takes part in the shared transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPart {
    Card,
    Image,
    Title,
    Description,
    Button,
}

impl TransitionPart {
    pub const ALL: [TransitionPart; 5] = [
        TransitionPart::Card,
        TransitionPart::Image,
        TransitionPart::Title,
        TransitionPart::Description,
        TransitionPart::Button,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            TransitionPart::Card => "card",
            TransitionPart::Image => "image",
            TransitionPart::Title => "title",
            TransitionPart::Description => "description",
            TransitionPart::Button => "button",
        }
    }

    /// Key for this part of the card titled `title`.
    ///
    /// The title is slugged so the key is usable as a CSS identifier
    /// (`view-transition-name`).
    pub fn key(self, title: &str, instance: InstanceId) -> String {
        format!("{}-{}-{}", self.prefix(), slug(title), instance)
    }
}

/// Title as it appears inside a transition key. Two titles with the same
/// slug would share keys.
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = false;
    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out
}

/// All transition keys for one card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKeys {
    pub card: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub button: String,
}

impl TransitionKeys {
    pub fn new(title: &str, instance: InstanceId) -> Self {
        Self {
            card: TransitionPart::Card.key(title, instance),
            image: TransitionPart::Image.key(title, instance),
            title: TransitionPart::Title.key(title, instance),
            description: TransitionPart::Description.key(title, instance),
            button: TransitionPart::Button.key(title, instance),
        }
    }

    pub fn get(&self, part: TransitionPart) -> &str {
        match part {
            TransitionPart::Card => &self.card,
            TransitionPart::Image => &self.image,
            TransitionPart::Title => &self.title,
            TransitionPart::Description => &self.description,
            TransitionPart::Button => &self.button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn test_key_format() {
        let id = InstanceId(7);
        assert_eq!(TransitionPart::Card.key("Prime Location", id), "card-prime-location-g7");
        assert_eq!(TransitionPart::Title.key(" Experience", id), "title-experience-g7");
    }

    #[test]
    fn test_slug_collapses_punctuation() {
        assert_eq!(slug("Our  [Vision]"), "our-vision-");
        assert_eq!(slug("D’Souza"), "d-souza");
    }

    #[test]
    fn test_keys_distinct_per_part() {
        let keys = TransitionKeys::new("Benefits", InstanceId(1));
        let mut all: Vec<_> = TransitionPart::ALL.iter().map(|p| keys.get(*p)).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), TransitionPart::ALL.len());
    }
}
