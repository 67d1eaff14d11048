//! Connecting Minds Core Library
//!
//! Content model and headless widget state for the Connecting Minds
//! business center site.
//!
//! ## Overview
//!
//! The site is made of two independent widgets:
//!
//! - **Testimonials**: an ordered list of [`Testimonial`] records shown by an
//!   animated carousel. [`Carousel`] holds the index bookkeeping.
//! - **Expandable cards**: an ordered list of [`Card`] records shown as a list,
//!   where one card at a time can be expanded into a detail overlay.
//!   [`Gallery`] owns that selection and the resources tied to it.
//!
//! Nothing here touches the DOM. The UI crate renders [`GalleryView`] and
//! supplies an [`OverlayHost`] implementation for scroll locking and the
//! Escape key listener.
//!
//! ## Quick Start
//!
//! ```
//! use connecting_minds_core::{Gallery, GalleryEvent, RecordingHost, SiteContent};
//!
//! let content = SiteContent::builtin();
//! let mut gallery = Gallery::new(content.cards, RecordingHost::new());
//!
//! gallery.activate_by_title("Experience");
//! assert!(gallery.is_scroll_locked());
//!
//! gallery.handle(GalleryEvent::KeyDown("Escape".into()));
//! assert!(gallery.active().is_none());
//! ```

pub mod carousel;
pub mod content;
pub mod error;
pub mod gallery;

// Re-exports
pub use carousel::{Carousel, AUTOPLAY_INTERVAL};
pub use content::{Card, DetailContent, DetailParagraph, DetailProducer, SiteContent, Testimonial};
pub use error::{SiteError, SiteResult};
pub use gallery::{
    CardRow, DismissReason, Gallery, GalleryEvent, GalleryView, InstanceId, OverlayHost,
    OverlayView, RecordingHost, Transition, TransitionKeys, TransitionPart,
};
