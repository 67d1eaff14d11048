//! Team testimonials section.

use connecting_minds_ui::AnimatedTestimonials;
use dioxus::prelude::*;

use crate::context::use_site_settings;

/// Passes the ordered testimonial list to the carousel.
#[component]
pub fn TestimonialMain() -> Element {
    let settings = use_site_settings();

    rsx! {
        AnimatedTestimonials {
            testimonials: settings.content.testimonials,
            autoplay: settings.autoplay,
        }
    }
}
