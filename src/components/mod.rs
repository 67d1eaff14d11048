//! Site widgets for Connecting Minds.
//!
//! Each widget reads its own list from the site context and hands it to the
//! matching component from `connecting-minds-ui`.

mod expandable_card_demo;
mod testimonial_main;

pub use expandable_card_demo::ExpandableCardDemo;
pub use testimonial_main::TestimonialMain;
