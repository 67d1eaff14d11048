//! Home page - the only page of the site.
//!
//! Hero, the expandable "spaces" cards, then the team testimonials.

use dioxus::prelude::*;

use crate::components::{ExpandableCardDemo, TestimonialMain};

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "home",
            header { class: "hero",
                h1 { class: "page-title", "Connecting Minds" }
                p { class: "tagline",
                    "Business center and meeting rooms in City Center Garhoud, Dubai"
                }
            }

            section { class: "section",
                h2 { class: "section-header", "Why Connecting Minds" }
                ExpandableCardDemo {}
            }

            section { class: "section",
                h2 { class: "section-header", "Meet the Team" }
                TestimonialMain {}
            }
        }
    }
}
