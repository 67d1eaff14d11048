//! Webview-backed overlay host.
//!
//! Scroll locking toggles `overflow` on `<body>`. The Escape listener is a
//! `keydown` handler on `window` that forwards the key name over the eval
//! channel; [`DomHost::take_listener`] hands that channel to the component so
//! it can feed the keys back into the gallery.

use std::cell::RefCell;
use std::rc::Rc;

use connecting_minds_core::{InstanceId, OverlayHost};
use dioxus::document::{Document, Eval};

const LOCK_SCROLL_JS: &str = r#"document.body.style.overflow = "hidden";"#;
const UNLOCK_SCROLL_JS: &str = r#"document.body.style.overflow = "auto";"#;

/// Sent over the listener channel when the listener is removed, so the
/// receiving task can stop.
pub const LISTENER_CLOSED: &str = "";

const ATTACH_LISTENER_JS: &str = r#"
const slot = "__INSTANCE__";
window.__cmOverlayListeners = window.__cmOverlayListeners || {};
if (window.__cmOverlayListeners[slot]) {
  window.__cmOverlayListeners[slot]();
}
const onKeyDown = (event) => {
  if (event.key === "Escape") {
    dioxus.send(event.key);
  }
};
window.addEventListener("keydown", onKeyDown);
window.__cmOverlayListeners[slot] = () => {
  window.removeEventListener("keydown", onKeyDown);
  delete window.__cmOverlayListeners[slot];
  dioxus.send("");
};
"#;

const DETACH_LISTENER_JS: &str = r#"
const slot = "__INSTANCE__";
const listeners = window.__cmOverlayListeners || {};
if (listeners[slot]) {
  listeners[slot]();
}
"#;

pub(crate) fn attach_script(instance: InstanceId) -> String {
    ATTACH_LISTENER_JS.replace("__INSTANCE__", &instance.to_string())
}

pub(crate) fn detach_script(instance: InstanceId) -> String {
    DETACH_LISTENER_JS.replace("__INSTANCE__", &instance.to_string())
}

/// [`OverlayHost`] that drives the page through script evaluation.
pub struct DomHost {
    document: Rc<dyn Document>,
    listener: RefCell<Option<Eval>>,
}

impl DomHost {
    /// Capture the current document. Must be called inside a component.
    pub fn new() -> Self {
        Self {
            document: dioxus::document::document(),
            listener: RefCell::new(None),
        }
    }

    /// Take the channel of the most recently attached key listener.
    pub fn take_listener(&self) -> Option<Eval> {
        self.listener.borrow_mut().take()
    }
}

impl Default for DomHost {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayHost for DomHost {
    fn lock_scroll(&self) {
        self.document.eval(LOCK_SCROLL_JS.to_string());
    }

    fn unlock_scroll(&self) {
        self.document.eval(UNLOCK_SCROLL_JS.to_string());
    }

    fn attach_dismiss_listeners(&self, instance: InstanceId) {
        tracing::debug!(%instance, "Attaching overlay key listener");
        let eval = self.document.eval(attach_script(instance));
        *self.listener.borrow_mut() = Some(eval);
    }

    fn detach_dismiss_listeners(&self, instance: InstanceId) {
        tracing::debug!(%instance, "Detaching overlay key listener");
        self.listener.borrow_mut().take();
        self.document.eval(detach_script(instance));
    }
}
