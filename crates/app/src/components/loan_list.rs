use dioxus::prelude::*;
use shared_types::{LoadState, LoanQuery, Role};
use shared_ui::{ErrorCard, SkeletonRows};

use crate::components::LoanRow;
use crate::LoanContext;

/// Loans returned for one query, one row each.
#[component]
pub fn LoanList(
    query: LoanQuery,
    role: Role,
    #[props(default = true)] actions: bool,
) -> Element {
    let ctx = use_context::<LoanContext>();

    // Track the query in a signal so the resource re-runs when the route changes it
    let mut query_signal = use_signal(|| query.clone());
    if *query_signal.peek() != query {
        query_signal.set(query.clone());
    }

    let loans = use_resource(move || {
        let client = ctx.client.clone();
        let query = query_signal();
        async move {
            let result = client.fetch_loans(&query).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "Could not fetch loan data");
            }
            result
        }
    });

    let state = LoadState::from_fetch(loans.read().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./loan_list.css") }

        div { class: "loan-list",
            div { class: "loan-list-header",
                span { "Borrower" }
                span { "Amount" }
                span { "Date" }
                span { "Status" }
                if actions {
                    span { class: "loan-list-header-action", "Action" }
                }
            }

            match state {
                LoadState::Loading => rsx! { SkeletonRows { count: 4 } },
                LoadState::Failed(message) => rsx! {
                    ErrorCard { title: "Could not load loans", message }
                },
                LoadState::Ready(records) if records.is_empty() => rsx! {
                    p { class: "loan-list-empty", "No loans available" }
                },
                LoadState::Ready(records) => rsx! {
                    for record in records {
                        LoanRow { key: "{record.id}", record: record.clone(), role, actions }
                    }
                },
            }
        }
    }
}
