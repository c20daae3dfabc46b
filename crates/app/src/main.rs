use client::LoanClient;
use dioxus::prelude::*;
use shared_types::ClientConfig;

mod components;
mod config;
mod format_helpers;
mod routes;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Loan service client and settings, provided once at the root.
#[derive(Clone)]
pub struct LoanContext {
    pub client: LoanClient,
    pub config: ClientConfig,
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = config::load();
        tracing::info!(
            base_url = %config.api.base_url,
            list_base_url = %config.api.list_base_url(),
            "loan service configured"
        );
        LoanContext {
            client: LoanClient::new(config.api.clone()),
            config,
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
