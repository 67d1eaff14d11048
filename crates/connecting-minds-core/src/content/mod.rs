//! Site content: testimonials and gallery cards.
//!
//! Content is built in, but can be replaced from a JSON file. Either section
//! of the file may be omitted, in which case the built-in list is kept.
//!
//! ```json
//! {
//!   "testimonials": [
//!     { "quote": "...", "name": "...", "designation": "...", "image_ref": "..." }
//!   ],
//!   "cards": [
//!     { "title": "...", "description": "...", "image_ref": "...",
//!       "cta_label": "Expand", "cta_target": "https://...",
//!       "detail": [["Heading line", "Body line"], ["Second paragraph"]] }
//!   ]
//! }
//! ```

pub mod builtin;
pub mod card;
pub mod testimonial;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};
use crate::gallery::identity::slug;

pub use card::{Card, CardRecord, DetailContent, DetailParagraph, DetailProducer, DEFAULT_CTA_LABEL};
pub use testimonial::Testimonial;

/// Everything the two widgets render.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub testimonials: Vec<Testimonial>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    testimonials: Option<Vec<Testimonial>>,
    #[serde(default)]
    cards: Option<Vec<CardRecord>>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteContent {
    pub fn builtin() -> Self {
        Self {
            testimonials: builtin::testimonials(),
            cards: builtin::cards(),
        }
    }

    /// Parse a content file, falling back to built-in sections that the
    /// file leaves out.
    pub fn from_json_str(json: &str) -> SiteResult<Self> {
        let file: ContentFile = serde_json::from_str(json)?;

        let testimonials = file.testimonials.unwrap_or_else(builtin::testimonials);
        let cards = match file.cards {
            Some(records) => records.into_iter().map(Card::from).collect(),
            None => builtin::cards(),
        };

        let content = Self { testimonials, cards };
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            testimonials = content.testimonials.len(),
            cards = content.cards.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Card titles key the transition identities, so they must be present
    /// and unique once slugged.
    pub fn validate(&self) -> SiteResult<()> {
        for (i, t) in self.testimonials.iter().enumerate() {
            if t.name.trim().is_empty() {
                return Err(SiteError::InvalidContent(format!(
                    "testimonial {} has an empty name",
                    i
                )));
            }
        }

        let mut seen = HashSet::new();
        for (i, card) in self.cards.iter().enumerate() {
            if card.title.is_empty() {
                return Err(SiteError::InvalidContent(format!("card {} has an empty title", i)));
            }
            if !seen.insert(slug(&card.title)) {
                return Err(SiteError::DuplicateCardTitle(card.title.clone()));
            }
        }

        Ok(())
    }
}
