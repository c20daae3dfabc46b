use dioxus::prelude::*;
use shared_types::{LoanQuery, Role};

use crate::components::{LoanList, StatsSection};

/// Administrator view: every loan, with Accept/Reject actions.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Dashboard" }
            p { class: "dashboard-subtitle", "{Role::Admin.display_name()}" }

            StatsSection { role: Role::Admin }

            section { class: "dashboard-section",
                h3 { class: "dashboard-section-title", "Applied loans" }
                LoanList { query: LoanQuery::ByRole(Role::Admin), role: Role::Admin }
            }
        }
    }
}
