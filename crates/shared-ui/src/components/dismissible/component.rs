use dioxus::prelude::*;

/// Where a pointer-down landed relative to an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

/// Open/closed state of a transient overlay (menu, dialog).
///
/// A pointer-down outside the overlay closes it; one inside leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dismissible {
    open: bool,
}

impl Dismissible {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follow an open/close request from the overlay itself (trigger click,
    /// Escape, item selected).
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Apply a pointer-down. Returns `true` when it closed the overlay.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.open && target == PointerTarget::Outside {
            self.open = false;
            return true;
        }
        false
    }
}

/// Transparent full-screen layer that reports pointer-downs outside an
/// overlay.
///
/// Render it only while the overlay is open, as a sibling placed under the
/// overlay's content; the listener then exists exactly as long as the
/// overlay does. Overlay content must sit above it (`z-index` over 1000).
#[component]
pub fn DismissLayer(on_dismiss: EventHandler<PointerTarget>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dismiss-layer",
            aria_hidden: "true",
            onpointerdown: move |_| on_dismiss.call(PointerTarget::Outside),
        }
    }
}
