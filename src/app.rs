use dioxus::prelude::*;

use crate::context::{get_autoplay, get_site_content, SiteSettings};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the site content to every widget.
#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteSettings {
        content: get_site_content(),
        autoplay: get_autoplay(),
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
