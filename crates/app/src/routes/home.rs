use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;
use crate::LoanContext;

/// Landing page linking to the two dashboards.
#[component]
pub fn Home() -> Element {
    let ctx = use_context::<LoanContext>();
    let officer_name = ctx.config.verifier.officer_name.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            h1 { class: "home-title", "Loan desk" }
            p { class: "home-subtitle",
                "Review loan applications, record verifications and approve disbursements."
            }

            div { class: "home-grid",
                Link { to: Route::AdminDashboard {}, class: "home-card-link",
                    Card {
                        CardHeader {
                            Icon::<LdShield> { icon: LdShield, width: 24, height: 24 }
                            CardTitle { "{Role::Admin.display_name()}" }
                            CardDescription { "Accept or reject verified applications." }
                        }
                        CardContent { span { class: "home-card-cta", "Open admin dashboard" } }
                    }
                }
                Link { to: Route::VerifierHome {}, class: "home-card-link",
                    Card {
                        CardHeader {
                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 24, height: 24 }
                            CardTitle { "{Role::Verifier.display_name()}" }
                            CardDescription { "Signed in as {officer_name}." }
                        }
                        CardContent { span { class: "home-card-cta", "Open verifier dashboard" } }
                    }
                }
            }
        }
    }
}
