use dioxus::prelude::*;
use dioxus_logger::tracing;
use qualitrack::{
    audit::workflow::{new_finding, record_finding, FindingDraft},
    model::finding::{EntityType, Severity},
};

use crate::client::{
    router::Route,
    store::{app::AppContext, auditor::AuditorContext, notice::NoticeState},
};

/// Form for recording a finding against an entity of the audited company.
///
/// Only rendered in auditor mode while the viewed company has an active
/// assignment. `on_recorded` fires after the insert succeeds so the caller can
/// refetch its findings.
#[component]
pub fn AuditActionPanel(
    entity_id: String,
    entity_type: EntityType,
    on_recorded: Option<EventHandler<()>>,
) -> Element {
    let app = use_context::<AppContext>();
    let auditor = use_context::<AuditorContext>();
    let mut notice = use_context::<NoticeState>();
    let route = use_route::<Route>();

    let mut severity = use_signal(|| Severity::MinorNonconformity);
    let mut notes = use_signal(String::new);
    let mut saving = use_signal(|| false);

    if !auditor.is_auditor_mode() {
        return rsx!();
    }
    let Some(assignment) = auditor.current_assignment() else {
        return rsx!();
    };
    let context = auditor.current_route_context(&route.to_string());

    let submit = move |_| {
        let draft = FindingDraft {
            entity_id: entity_id.clone(),
            entity_type,
            severity: severity(),
            notes: notes(),
        };
        let finding = match auditor.with_session(|session| new_finding(session, draft)) {
            Ok(finding) => finding,
            Err(e) => {
                notice.error(e.user_message());
                return;
            }
        };

        let backend = app.backend.clone();
        saving.set(true);
        spawn(async move {
            match record_finding(&backend, &finding).await {
                Ok(_) => {
                    notes.set(String::new());
                    notice.success("Finding recorded");
                    if let Some(handler) = on_recorded {
                        handler.call(());
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to record finding: {}", e);
                    notice.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-200 w-full",
            div { class: "card-body gap-3",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title", "Record finding" }
                    span { class: "badge badge-outline", "{assignment.status.label()}" }
                }
                if let Some(context) = context {
                    p { class: "text-sm opacity-80",
                        "Clause {context.clause} · {context.title}"
                    }
                    p { class: "text-xs opacity-60", "{context.description}" }
                }
                select {
                    class: "select select-bordered w-full",
                    value: "{severity().as_str()}",
                    onchange: move |event| {
                        let value = event.value();
                        if let Some(selected) = Severity::ALL.iter().find(|s| s.as_str() == value) {
                            severity.set(*selected);
                        }
                    },
                    for choice in Severity::ALL {
                        option { value: "{choice.as_str()}", "{choice.label()}" }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Auditor notes",
                    value: "{notes}",
                    oninput: move |event| notes.set(event.value()),
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: submit,
                        if saving() { "Saving..." } else { "Record" }
                    }
                }
            }
        }
    )
}
