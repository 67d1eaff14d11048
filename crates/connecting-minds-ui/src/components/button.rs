//! Button Components
//!
//! - Pill: CTA inside a card row, fills green on hover
//! - Solid: green CTA in the expanded overlay
//! - Round icon buttons for back, close and carousel arrows

use dioxus::prelude::*;

use crate::components::{ArrowLeftIcon, CloseIcon};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Grey pill that turns green on hover
    #[default]
    Pill,
    /// Solid green pill
    Solid,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Solid => "btn-solid",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Shared transition key, rendered as `data-layout-id`
    #[props(default)]
    pub layout_id: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Pill,
///         onclick: move |_| expand(),
///         "Expand"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.variant.class()}",
            r#type: "button",
            "data-layout-id": props.layout_id.clone(),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    evt.stop_propagation();
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Link styled as a button, opening in a new browsing context
#[component]
pub fn ButtonLink(
    href: String,
    #[props(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[props(default)] layout_id: Option<String>,
    #[props(default)] style: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        a {
            class: "{variant.class()}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "data-layout-id": layout_id,
            style: style,
            {children}
        }
    }
}

/// Icon button for compact actions (close, back, arrows)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon. Only shown on narrow screens.
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            CloseIcon {}
        }
    }
}

/// Back button with left arrow, shown on every screen size
#[component]
pub fn BackButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Back".to_string(),
            class: "back-btn".to_string(),
            ArrowLeftIcon {}
        }
    }
}
