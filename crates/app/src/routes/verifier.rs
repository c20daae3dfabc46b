use dioxus::prelude::*;
use shared_types::{LoanQuery, Role};

use crate::components::{LoanList, StatsSection};
use crate::LoanContext;

/// Verifier view for the configured officer.
#[component]
pub fn VerifierHome() -> Element {
    let ctx = use_context::<LoanContext>();
    let officer_id = ctx.config.verifier.default_officer_id.clone();

    rsx! {
        VerifierDashboard { officer_id }
    }
}

/// Verifier view: loans assigned to one officer, with Verify/Reject actions.
#[component]
pub fn VerifierDashboard(officer_id: String) -> Element {
    let ctx = use_context::<LoanContext>();
    let officer_name = ctx.config.verifier.officer_name.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Dashboard" }
            p { class: "dashboard-subtitle",
                "{Role::Verifier.display_name()} · {officer_name} · Officer {officer_id}"
            }

            StatsSection { role: Role::Verifier }

            section { class: "dashboard-section",
                h3 { class: "dashboard-section-title", "Assigned loans" }
                LoanList {
                    query: LoanQuery::ByOfficer(officer_id.clone()),
                    role: Role::Verifier,
                }
            }
        }
    }
}
