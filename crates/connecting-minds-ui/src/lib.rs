//! Connecting Minds UI Components
//!
//! Dioxus components for the Connecting Minds business center site.
//!
//! ## Widgets
//!
//! - [`ExpandableCardGallery`]: list of cards, one of which can be expanded
//!   into a full-screen detail overlay. Dismissed with Escape, a click
//!   outside the panel, or the back/close controls.
//! - [`AnimatedTestimonials`]: stacked portrait carousel with word-by-word
//!   quote reveal and optional autoplay.
//!
//! State lives in `connecting-minds-core`; these components only render it
//! and route DOM events into it. [`DomHost`] is the webview side of the
//! gallery's scroll lock and key listener.

pub mod components;
pub mod host;

pub use components::*;
pub use host::DomHost;
