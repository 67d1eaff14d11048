//! Expandable card records and their lazily produced detail content.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Label used for a card's call-to-action when none is given.
pub const DEFAULT_CTA_LABEL: &str = "Expand";

/// One paragraph of detail copy.
///
/// Lines inside a paragraph are set apart by a blank line when rendered,
/// which is how the site separates a heading line from the body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailParagraph {
    pub lines: Vec<String>,
}

impl DetailParagraph {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renderable detail markup shown in the expanded overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailContent {
    pub paragraphs: Vec<DetailParagraph>,
}

impl DetailContent {
    pub fn new(paragraphs: Vec<DetailParagraph>) -> Self {
        Self { paragraphs }
    }

    /// Single paragraph made of the given lines.
    pub fn paragraph<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(vec![DetailParagraph::new(lines)])
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.lines.is_empty())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.paragraphs
            .iter()
            .flat_map(|p| p.lines.iter())
            .any(|line| line.contains(needle))
    }
}

/// Zero-argument producer of a card's detail content.
///
/// Stored on the card and only called while that card is expanded.
#[derive(Clone)]
pub struct DetailProducer(Arc<dyn Fn() -> DetailContent + Send + Sync>);

impl DetailProducer {
    pub fn new<F>(produce: F) -> Self
    where
        F: Fn() -> DetailContent + Send + Sync + 'static,
    {
        Self(Arc::new(produce))
    }

    /// Producer that hands out clones of already-built content.
    pub fn fixed(content: DetailContent) -> Self {
        Self::new(move || content.clone())
    }

    pub fn produce(&self) -> DetailContent {
        (self.0)()
    }
}

impl PartialEq for DetailProducer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DetailProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DetailProducer(..)")
    }
}

/// A card in the expandable gallery.
///
/// The title doubles as the card's logical identity: transition keys for the
/// list row and the overlay are derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub cta_label: String,
    pub cta_target: String,
    pub detail: DetailProducer,
}

impl Card {
    /// Build a card with the default CTA label. Title and description are
    /// stored trimmed.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
        cta_target: impl Into<String>,
        detail: DetailProducer,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            description: description.into().trim().to_string(),
            image_ref: image_ref.into(),
            cta_label: DEFAULT_CTA_LABEL.to_string(),
            cta_target: cta_target.into(),
            detail,
        }
    }

    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self
    }

    /// Invoke the detail producer.
    pub fn produce_detail(&self) -> DetailContent {
        self.detail.produce()
    }
}

/// On-disk shape of a card. Detail content is fixed text here; the
/// producer wraps it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CardRecord {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    pub cta_target: String,
    #[serde(default)]
    pub detail: DetailContent,
}

fn default_cta_label() -> String {
    DEFAULT_CTA_LABEL.to_string()
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Card::new(
            record.title,
            record.description,
            record.image_ref,
            record.cta_target,
            DetailProducer::fixed(record.detail),
        )
        .with_cta_label(record.cta_label)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_card_trims_title_and_description() {
        let card = Card::new(
            " Experience",
            " Luxury",
            "img.jpg",
            "https://example.com",
            DetailProducer::fixed(DetailContent::default()),
        );
        assert_eq!(card.title, "Experience");
        assert_eq!(card.description, "Luxury");
        assert_eq!(card.cta_label, DEFAULT_CTA_LABEL);
    }

    #[test]
    fn test_producer_runs_on_demand() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let producer = DetailProducer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            DetailContent::paragraph(["hello"])
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(producer.produce().contains("hello"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_producer_equality_is_identity() {
        let a = DetailProducer::fixed(DetailContent::paragraph(["x"]));
        let b = DetailProducer::fixed(DetailContent::paragraph(["x"]));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_detail_search_and_emptiness() {
        let content = DetailContent::new(vec![
            DetailParagraph::new(["Heading", "Body"]),
            DetailParagraph::new(["Second"]),
        ]);
        assert!(content.contains("Second"));
        assert!(!content.contains("Third"));
        assert!(!content.is_empty());
        assert!(DetailContent::default().is_empty());
    }

    #[test]
    fn test_card_record_defaults() {
        let record: CardRecord = serde_json::from_str(
            r#"{"title":"Benefits","description":"of Renting","image_ref":"a.jpg","cta_target":"https://x"}"#,
        )
        .unwrap();
        let card = Card::from(record);
        assert_eq!(card.cta_label, "Expand");
        assert!(card.produce_detail().is_empty());
    }

    #[test]
    fn test_card_record_detail_shape() {
        let record: CardRecord = serde_json::from_str(
            r#"{"title":"T","description":"D","image_ref":"a.jpg","cta_label":"Open",
                "cta_target":"https://x","detail":[["Heading","Body"],["More"]]}"#,
        )
        .unwrap();
        let card = Card::from(record);
        assert_eq!(card.cta_label, "Open");
        let detail = card.produce_detail();
        assert_eq!(detail.paragraphs.len(), 2);
        assert_eq!(detail.paragraphs[0].lines, vec!["Heading", "Body"]);
    }
}
