//! Render model for the gallery.

use crate::content::DetailContent;

use super::identity::TransitionKeys;

/// One collapsed list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRow {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub cta_label: String,
    pub keys: TransitionKeys,
}

/// The expanded card. `detail` has already been produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub cta_label: String,
    pub cta_target: String,
    pub detail: DetailContent,
    pub keys: TransitionKeys,
}

/// What the gallery shows right now.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub rows: Vec<CardRow>,
    pub overlay: Option<OverlayView>,
}

impl GalleryView {
    pub fn is_list_only(&self) -> bool {
        self.overlay.is_none()
    }
}
