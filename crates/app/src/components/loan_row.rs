use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEllipsis, LdX};
use dioxus_free_icons::Icon;
use shared_types::{LoanAction, LoanRecord, LoanStatus, Role, RowHandle, RowStatus, StatusTone};
use shared_ui::{
    use_toast, ActionMenu, Badge, BadgeTone, DialogContent, DialogDescription, DialogRoot,
    DialogTitle, Dismissible, PersonAvatar, ToastOptions,
};

use crate::format_helpers::{format_amount, format_date_long, format_updated_ago, MISSING};
use crate::LoanContext;

/// Badge colour for a status.
pub(crate) fn badge_tone(status: &LoanStatus) -> BadgeTone {
    match status.tone() {
        StatusTone::Blue => BadgeTone::Blue,
        StatusTone::Yellow => BadgeTone::Yellow,
        StatusTone::Red => BadgeTone::Red,
        StatusTone::Gray => BadgeTone::Gray,
    }
}

/// Generated avatar for a person, keyed by name.
pub(crate) fn avatar_url(name: &str) -> String {
    format!("https://i.pravatar.cc/40?u={}", urlencoding::encode(name))
}

/// Menu entries for a role, in the order the role lists them.
pub(crate) fn menu_items(role: Role) -> Vec<(LoanAction, String)> {
    role.actions()
        .iter()
        .map(|action| (*action, action.label().to_string()))
        .collect()
}

/// Row state kept in a signal, so the client can drive it across the await.
#[derive(Clone, Copy)]
struct RowSignal(Signal<RowStatus>);

impl RowHandle for RowSignal {
    fn update<T>(&mut self, f: impl FnOnce(&mut RowStatus) -> T) -> T {
        f(&mut *self.0.write())
    }
}

/// One loan: avatar and name, amount, date, status badge and, when enabled,
/// the role's action menu.
///
/// The badge only changes after the backend accepts a status update. A
/// failed update leaves it as it was and shows the error under the row and
/// in a toast.
#[component]
pub fn LoanRow(record: LoanRecord, role: Role, #[props(default = true)] actions: bool) -> Element {
    let ctx = use_context::<LoanContext>();
    let toast = use_toast();

    let row = use_signal(|| RowStatus::new(record.status.clone()));
    let mut menu = use_signal(Dismissible::default);
    let mut details = use_signal(Dismissible::default);

    let loan_id = record.id.clone();
    let run_action = use_callback(move |action: LoanAction| {
        menu.write().close();

        let client = ctx.client.clone();
        let officer = ctx.config.verifier.officer_name.clone();
        let loan_id = loan_id.clone();

        spawn(async move {
            let mut handle = RowSignal(row);
            if let Err(err) = client
                .apply_action(&mut handle, role, &loan_id, action, &officer)
                .await
            {
                toast.error(
                    format!(
                        "Could not {} this loan. {}",
                        action.label().to_lowercase(),
                        err.friendly_message()
                    ),
                    ToastOptions::new(),
                );
            }
        });
    });

    let headline = record.headline().to_string();
    let amount = format_amount(record.amount);
    let date = format_date_long(record.created_at);
    let updated = format_updated_ago(record.created_at, Utc::now());

    let status = row.read().displayed().clone();
    let busy = row.read().is_busy();
    let row_error = row.read().error().map(str::to_string);
    let details_open = details.read().is_open();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./loan_row.css") }

        div { class: "loan-row-wrapper",
            div { class: "loan-row",
                div { class: "loan-row-person",
                    PersonAvatar { name: headline.clone(), src: avatar_url(&headline) }
                    div { class: "loan-row-person-text",
                        button {
                            r#type: "button",
                            class: "loan-row-name",
                            onclick: move |_| details.write().open(),
                            "{headline}"
                        }
                        span { class: "loan-row-updated", "{updated}" }
                    }
                }
                span { class: "loan-row-amount", "{amount}" }
                span { class: "loan-row-date", "{date}" }
                span {
                    Badge { tone: badge_tone(&status), "{status}" }
                }

                if actions {
                    div { class: "loan-row-actions",
                        ActionMenu::<LoanAction> {
                            state: menu,
                            items: menu_items(role),
                            on_select: move |action: LoanAction| run_action.call(action),
                            label: "Loan actions",
                            busy: busy,
                            Icon::<LdEllipsis> { icon: LdEllipsis, width: 18, height: 18 }
                        }
                    }
                }
            }

            if let Some(message) = row_error {
                p { class: "loan-row-error", role: "alert", "{message}" }
            }
        }

        DialogRoot {
            open: details_open,
            on_open_change: move |open: bool| details.write().set_open(open),
            DialogContent {
                div { class: "loan-details-header",
                    DialogTitle { "Loan details" }
                    button {
                        r#type: "button",
                        class: "loan-details-close",
                        aria_label: "Close",
                        onclick: move |_| details.write().close(),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }
                DialogDescription { "{headline}" }
                dl { class: "loan-details",
                    dt { "Borrower" }
                    dd { {record.borrower_name.clone().unwrap_or_else(|| MISSING.to_string())} }
                    dt { "Loan officer" }
                    dd { {record.officer.clone().unwrap_or_else(|| MISSING.to_string())} }
                    dt { "Reason" }
                    dd { {record.reason.clone().unwrap_or_else(|| MISSING.to_string())} }
                    dt { "Amount" }
                    dd { "{amount}" }
                    dt { "Applied on" }
                    dd { "{date}" }
                    dt { "Status" }
                    dd { Badge { tone: badge_tone(&status), "{status}" } }
                    dt { "Loan ID" }
                    dd { code { "{record.id}" } }
                }
            }
        }
    }
}
