//! Index bookkeeping for the animated testimonial carousel.

use std::time::Duration;

/// How often autoplay advances to the next testimonial.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Largest tilt, in degrees, applied to stacked non-active images.
const MAX_TILT: i32 = 10;

/// Which testimonial is in front.
///
/// An empty carousel is inert: navigation does nothing and `active` stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.active
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    /// Tilt for the image at `index`. The active image is upright; the rest
    /// get a stable angle in `-MAX_TILT..=MAX_TILT` so the stack doesn't
    /// jump around between renders.
    pub fn rotation(&self, index: usize) -> i32 {
        if self.is_active(index) {
            return 0;
        }
        let spread = (2 * MAX_TILT + 1) as usize;
        ((index * 7 + 3) % spread) as i32 - MAX_TILT
    }

    /// Stacking order: the active image on top, the rest below in list order.
    pub fn z_order(&self, index: usize) -> usize {
        if self.is_active(index) {
            self.len + 1
        } else {
            self.len.saturating_sub(index)
        }
    }
}
