//! Inline SVG icons.

use dioxus::prelude::*;

/// "X" close glyph
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-fade",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { stroke: "none", d: "M0 0h24v24H0z", fill: "none" }
            path { d: "M18 6l-12 12" }
            path { d: "M6 6l12 12" }
        }
    }
}

/// Left arrow
#[component]
pub fn ArrowLeftIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        }
    }
}

/// Right arrow
#[component]
pub fn ArrowRightIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}
