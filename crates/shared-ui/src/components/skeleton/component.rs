use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            aria_hidden: "true",
            ..merged,
        }
    }
}

/// A stack of row-height placeholders.
#[component]
pub fn SkeletonRows(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div {
            class: "skeleton-rows",
            aria_busy: "true",
            for _ in 0..count {
                Skeleton { style: "height: 3rem; width: 100%;" }
            }
        }
    }
}
