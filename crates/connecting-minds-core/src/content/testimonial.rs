//! Testimonial records for the animated carousel.

use serde::{Deserialize, Serialize};

/// A quote from a team member, shown one at a time by the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub designation: String,
    pub image_ref: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        name: impl Into<String>,
        designation: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            name: name.into(),
            designation: designation.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Quote split into words, for word-by-word reveal animations.
    pub fn quote_words(&self) -> impl Iterator<Item = &str> {
        self.quote.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_words() {
        let t = Testimonial::new("  Clarity and   vision ", "Marina", "Founder", "m.jpg");
        assert_eq!(t.quote_words().collect::<Vec<_>>(), vec!["Clarity", "and", "vision"]);
    }

    #[test]
    fn test_testimonial_json_fields() {
        let t: Testimonial = serde_json::from_str(
            r#"{"quote":"q","name":"n","designation":"d","image_ref":"i"}"#,
        )
        .unwrap();
        assert_eq!(t, Testimonial::new("q", "n", "d", "i"));
    }
}
