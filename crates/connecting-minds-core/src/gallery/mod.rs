//! Expandable card gallery.
//!
//! [`Gallery`] keeps the single active-card slot, [`OverlayHost`] is where
//! the scroll lock and Escape listener come from, and [`GalleryView`] is what
//! the UI renders.

pub mod host;
pub mod identity;
pub mod state;
pub mod view;

pub use host::{OverlayHost, RecordingHost};
pub use identity::{InstanceId, TransitionKeys, TransitionPart};
pub use state::{DismissReason, Gallery, GalleryEvent, Transition, ESCAPE_KEY};
pub use view::{CardRow, GalleryView, OverlayView};
