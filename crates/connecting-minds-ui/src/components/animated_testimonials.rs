//! Animated Testimonials
//!
//! Portrait stack on one side, quote on the other. The front portrait is
//! upright; the rest sit behind it at a slight tilt. The quote fades in one
//! word at a time whenever the active testimonial changes.

use connecting_minds_core::{Carousel, Testimonial, AUTOPLAY_INTERVAL};
use dioxus::prelude::*;

use crate::components::{ArrowLeftIcon, ArrowRightIcon, IconButton};

/// Delay between consecutive words of the quote reveal, in milliseconds.
const WORD_STAGGER_MS: usize = 20;

/// Testimonial carousel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AnimatedTestimonials {
///         testimonials: SiteContent::builtin().testimonials,
///         autoplay: true,
///     }
/// }
/// ```
#[component]
pub fn AnimatedTestimonials(
    /// Testimonials in display order
    testimonials: Vec<Testimonial>,
    /// Advance automatically every few seconds
    #[props(default = false)]
    autoplay: bool,
) -> Element {
    let len = testimonials.len();
    let mut carousel = use_signal(move || Carousel::new(len));

    // The task belongs to this component and stops when it unmounts.
    use_effect(move || {
        if !autoplay {
            return;
        }
        spawn(async move {
            loop {
                tokio::time::sleep(AUTOPLAY_INTERVAL).await;
                carousel.write().next();
            }
        });
    });

    if testimonials.is_empty() {
        return VNode::empty();
    }

    let state = carousel();
    let active = &testimonials[state.active().min(len - 1)];

    rsx! {
        div { class: "testimonials",
            div { class: "testimonials__stack",
                for (index, testimonial) in testimonials.iter().enumerate() {
                    img {
                        key: "{testimonial.image_ref}-{index}",
                        class: if state.is_active(index) { "testimonials__portrait active" } else { "testimonials__portrait" },
                        src: "{testimonial.image_ref}",
                        alt: "{testimonial.name}",
                        draggable: "false",
                        style: "transform: rotate({state.rotation(index)}deg); z-index: {state.z_order(index)};",
                    }
                }
            }

            div { class: "testimonials__body",
                div {
                    key: "{state.active()}",
                    class: "testimonials__text",
                    h3 { class: "testimonials__name", "{active.name}" }
                    p { class: "testimonials__designation", "{active.designation}" }
                    p { class: "testimonials__quote",
                        for (i, word) in active.quote_words().enumerate() {
                            span {
                                class: "testimonials__word",
                                style: "animation-delay: {i * WORD_STAGGER_MS}ms;",
                                "{word} "
                            }
                        }
                    }
                }

                div { class: "testimonials__nav",
                    IconButton {
                        onclick: move |_| carousel.write().prev(),
                        aria_label: "Previous testimonial".to_string(),
                        class: "nav-btn".to_string(),
                        ArrowLeftIcon {}
                    }
                    IconButton {
                        onclick: move |_| carousel.write().next(),
                        aria_label: "Next testimonial".to_string(),
                        class: "nav-btn".to_string(),
                        ArrowRightIcon {}
                    }
                }
            }
        }
    }
}
