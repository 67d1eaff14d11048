//! Reusable site components
//!
//! Light card surfaces, pill-shaped calls to action and round icon
//! controls, all animated with CSS transitions from the global stylesheet.

mod animated_testimonials;
mod button;
mod expandable_cards;
mod icons;

pub use animated_testimonials::*;
pub use button::*;
pub use expandable_cards::*;
pub use icons::*;
