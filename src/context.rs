//! Site content context.
//!
//! The content is resolved once in `main` and handed to components through
//! `use_context`, so each widget gets its own copy of the lists.
//!
//! ## Usage
//!
//! ```ignore
//! let settings = use_site_settings();
//! rsx! { ExpandableCardGallery { cards: settings.content.cards } }
//! ```

use connecting_minds_core::SiteContent;
use dioxus::prelude::*;

/// Startup settings shared with every component.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteSettings {
    pub content: SiteContent,
    /// Testimonial carousel autoplay
    pub autoplay: bool,
}

/// Get the content resolved from the command line.
pub fn get_site_content() -> SiteContent {
    crate::get_site_content()
}

/// Get the autoplay flag from the command line.
pub fn get_autoplay() -> bool {
    crate::get_autoplay()
}

/// Hook to access the site settings from context.
pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>()
}
