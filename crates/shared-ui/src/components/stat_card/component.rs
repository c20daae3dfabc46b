use dioxus::prelude::*;

/// One aggregate figure with its label and an optional icon.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] icon: Option<Element>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "stat-card",
            if let Some(icon) = icon {
                div { class: "stat-card-icon", {icon} }
            }
            div {
                class: "stat-card-body",
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
            }
        }
    }
}
