use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdFileText, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{summary_tiles, LoadState, Role, TileKind};
use shared_ui::{ErrorCard, Skeleton, StatCard};

use crate::LoanContext;

/// Stat tiles for a role, fetched once per mount.
///
/// Loading shows one placeholder per tile; a failed fetch shows the error
/// instead of the grid.
#[component]
pub fn StatsSection(role: Role) -> Element {
    let ctx = use_context::<LoanContext>();

    let summary = use_resource(move || {
        let client = ctx.client.clone();
        async move {
            let result = client.fetch_summary().await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "Failed to fetch loans");
            }
            result
        }
    });

    let state = LoadState::from_fetch(summary.read().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./stats_section.css") }

        match state {
            LoadState::Loading => rsx! {
                div { class: "stats-grid",
                    for _ in TileKind::for_role(role) {
                        Skeleton { style: "height: 4.5rem;" }
                    }
                }
            },
            LoadState::Failed(message) => rsx! {
                ErrorCard { title: "Could not load the loan summary", message }
            },
            LoadState::Ready(summary) => rsx! {
                div { class: "stats-grid",
                    for tile in summary_tiles(summary.as_ref(), role) {
                        StatCard {
                            key: "{tile.label()}",
                            label: "{tile.label()}",
                            value: tile.value.clone(),
                            icon: tile_icon(tile.kind),
                        }
                    }
                }
            },
        }
    }
}

fn tile_icon(kind: TileKind) -> Element {
    match kind {
        TileKind::Active => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 24, height: 24 } },
        TileKind::Loans => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
        TileKind::Borrowers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
        TileKind::CashDisbursed => {
            rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 24, height: 24 } }
        }
    }
}
