use dioxus::document::Title;
use dioxus::prelude::*;
use qualitrack::{error::Error, model::assignment::AuditAssignment};

use crate::client::{
    components::Page,
    router::Route,
    store::{auditor::AuditorContext, notice::NoticeState, user::UserState},
};

#[component]
fn AssignmentCard(assignment: AuditAssignment) -> Element {
    let mut auditor = use_context::<AuditorContext>();
    let mut notice = use_context::<NoticeState>();

    let company = assignment.target_company();
    let selected = auditor
        .selection()
        .is_some_and(|selection| selection.id == company.id);
    let end_date = assignment
        .end_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "open".to_string());
    let percent = assignment.progress.clamp(0.0, 100.0);
    let target = company.clone();

    rsx!(
        li { class: "card bg-base-200",
            div { class: "card-body gap-2",
                div { class: "flex items-center gap-3",
                    if let Some(logo_url) = &company.logo_url {
                        img { class: "w-10 h-10 rounded", src: "{logo_url}", alt: "{company.name}" }
                    }
                    h2 { class: "card-title", "{company.name}" }
                    span { class: "badge badge-outline", "{assignment.status.label()}" }
                }
                p { class: "text-sm opacity-70",
                    "{assignment.start_date} to {end_date}"
                }
                progress { class: "progress progress-primary w-full", value: "{percent}", max: "100" }
                if let Some(notes) = &assignment.notes {
                    p { class: "text-sm", "{notes}" }
                }
                div { class: "card-actions justify-end",
                    if selected {
                        Link { to: Route::FindingsOverview {}, class: "btn btn-outline", "Continue" }
                    } else {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let company = target.clone();
                                let name = company.name.clone();
                                match auditor.enter(company) {
                                    Ok(()) => {
                                        notice.success(format!("Now auditing {name}"));
                                        navigator().push(Route::FindingsOverview {});
                                    }
                                    Err(e) => notice.error(Error::from(e).user_message()),
                                }
                            },
                            "Enter"
                        }
                    }
                }
            }
        }
    )
}

/// Entry point for auditors: lists active assignments and switches the viewed company.
#[component]
pub fn AuditorPortal() -> Element {
    let auditor = use_context::<AuditorContext>();
    let user_state = use_context::<Signal<UserState>>();

    let fetched = user_state.read().fetched;
    let assignments = auditor.assignments();

    rsx!(
        Title { "Auditor portal | Qualitrack" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl", "Auditor portal" }
            if !fetched {
                span { class: "loading loading-spinner" }
            } else if !auditor.is_auditor() {
                p { "This area is restricted to auditors." }
            } else if assignments.is_empty() {
                p { class: "opacity-70", "You have no active assignments." }
            } else {
                ul { class: "flex flex-col gap-4 w-full max-w-2xl",
                    for assignment in assignments {
                        AssignmentCard { key: "{assignment.id}", assignment }
                    }
                }
            }
        }
    )
}
