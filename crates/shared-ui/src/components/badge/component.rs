use dioxus::prelude::*;

/// Colour treatment of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Blue,
    Yellow,
    Red,
    #[default]
    Gray,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Blue => "blue",
            BadgeTone::Yellow => "yellow",
            BadgeTone::Red => "red",
            BadgeTone::Gray => "gray",
        }
    }
}

/// Small pill used for loan statuses and counters.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
