pub mod admin;
pub mod home;
pub mod not_found;
pub mod verifier;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdShield, LdUserCheck};
use dioxus_free_icons::Icon;

use admin::AdminDashboard;
use home::Home;
use not_found::NotFound;
use verifier::{VerifierDashboard, VerifierHome};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/verifier")]
    VerifierHome {},
    #[route("/verifier/:officer_id")]
    VerifierDashboard { officer_id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top navbar plus the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::Home {} => "Home",
        Route::AdminDashboard {} => "Admin",
        Route::VerifierHome {} | Route::VerifierDashboard { .. } => "Verifier",
        Route::NotFound { .. } => "",
    };
    let home_class = link_class(matches!(route, Route::Home {}));
    let admin_class = link_class(matches!(route, Route::AdminDashboard {}));
    let verifier_class = link_class(matches!(
        route,
        Route::VerifierHome {} | Route::VerifierDashboard { .. }
    ));

    rsx! {
        document::Title { "CREDIT APP · {page_title}" }
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        nav {
            class: "navbar",
            div {
                class: "navbar-bar",
                span { class: "navbar-brand", "CREDIT APP" }
                div {
                    class: "navbar-links",
                    Link {
                        to: Route::Home {},
                        class: home_class,
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Home"
                    }
                    Link {
                        to: Route::AdminDashboard {},
                        class: admin_class,
                        Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                        "Admin"
                    }
                    Link {
                        to: Route::VerifierHome {},
                        class: verifier_class,
                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                        "Verifier"
                    }
                }
            }
        }

        main {
            class: "page-content",
            Outlet::<Route> {}
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "navbar-link active"
    } else {
        "navbar-link"
    }
}
