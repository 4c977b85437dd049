use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use qualitrack::{
    audit::workflow::{reject_finding, respond_to_finding, validate_finding},
    error::Error,
    model::finding::{EntityType, Finding, FindingStatus},
};

use crate::client::{
    components::{AuditActionPanel, FindingIndicator, Page, SeveritySummary},
    hooks::use_audit_findings,
    store::{app::AppContext, auditor::AuditorContext, notice::NoticeState},
};

/// Workflow buttons for the current finding of an entity.
///
/// Company users answer open findings; auditors in auditor mode validate or
/// reject answered ones.
#[component]
fn FindingActions(finding: Finding, on_change: EventHandler<()>) -> Element {
    let auditor = use_context::<AuditorContext>();
    let mut notice = use_context::<NoticeState>();
    let mut text = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let reviewing = auditor.is_auditor_mode();
    let can_respond = !auditor.is_auditor() && finding.status == FindingStatus::Open;
    let can_review = reviewing && finding.status == FindingStatus::WaitingValidation;

    if !can_respond && !can_review {
        return rsx!();
    }

    let placeholder = if can_respond {
        "Response"
    } else {
        "Reason for rejection"
    };

    let mut run = move |action: Action, finding: Finding| {
        let backend = consume_context::<AppContext>().backend;
        let input = text();
        saving.set(true);
        spawn(async move {
            let result = match action {
                Action::Respond => respond_to_finding(&backend, &finding, &input).await,
                Action::Validate => validate_finding(&backend, &finding).await,
                Action::Reject => reject_finding(&backend, &finding, Some(&input)).await,
            };
            match result {
                Ok(updated) => {
                    text.set(String::new());
                    notice.success(format!("Finding {}", updated.status.label().to_lowercase()));
                    on_change.call(());
                }
                Err(e) => {
                    if matches!(e, Error::BackendError(_)) {
                        tracing::error!("Failed to update finding {}: {}", finding.id, e);
                    }
                    notice.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    let to_respond = finding.clone();
    let to_validate = finding.clone();
    let to_reject = finding.clone();

    rsx!(
        div { class: "flex flex-col gap-2 mt-2",
            if let Some(response) = &finding.company_response {
                p { class: "text-sm", span { class: "font-bold", "Response: " } "{response}" }
            }
            textarea {
                class: "textarea textarea-bordered textarea-sm w-full",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |event| text.set(event.value()),
            }
            div { class: "flex justify-end gap-2",
                if can_respond {
                    button {
                        class: "btn btn-sm btn-primary",
                        disabled: saving(),
                        onclick: move |_| run(Action::Respond, to_respond.clone()),
                        "Send response"
                    }
                }
                if can_review {
                    button {
                        class: "btn btn-sm btn-outline btn-error",
                        disabled: saving(),
                        onclick: move |_| run(Action::Reject, to_reject.clone()),
                        "Reject"
                    }
                    button {
                        class: "btn btn-sm btn-success",
                        disabled: saving(),
                        onclick: move |_| run(Action::Validate, to_validate.clone()),
                        "Validate"
                    }
                }
            }
        }
    )
}

#[derive(Clone, Copy)]
enum Action {
    Respond,
    Validate,
    Reject,
}

/// Open findings of the viewed company, grouped by entity.
#[component]
pub fn FindingsOverview() -> Element {
    let auditor = use_context::<AuditorContext>();
    let mut findings = use_audit_findings(None);
    let index = findings.index;

    let company_id = auditor.effective_company_id();
    let heading = match auditor.selection().filter(|_| auditor.is_auditor_mode()) {
        Some(company) => format!("Findings for {}", company.name),
        None => "Findings".to_string(),
    };

    let mut entities: Vec<String> = Vec::new();
    for finding in index.read().findings() {
        if !entities.contains(&finding.entity_id) {
            entities.push(finding.entity_id.clone());
        }
    }
    let error = index.read().last_error().map(str::to_string);
    let loaded = index.read().is_loaded();

    rsx!(
        Title { "Findings | Qualitrack" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl", "{heading}" }
            if company_id.is_none() {
                p { class: "opacity-70", "No company in scope." }
            } else {
                SeveritySummary { findings: index }
                if let Some(error) = error {
                    div { class: "alert alert-error max-w-2xl", "{error}" }
                }
                if !loaded && findings.is_loading() {
                    span { class: "loading loading-spinner" }
                } else if entities.is_empty() {
                    p { class: "opacity-70", "No open findings." }
                }
                ul { class: "flex flex-col gap-2 w-full max-w-2xl",
                    for entity_id in entities {
                        li { key: "{entity_id}", class: "card bg-base-200",
                            div { class: "card-body p-4",
                                div { class: "flex items-center justify-between",
                                    p { class: "font-mono text-sm", "{entity_id}" }
                                    FindingIndicator { entity_id: entity_id.clone(), findings: index }
                                }
                                if let Some(current) = index.read().finding_for(&entity_id).cloned() {
                                    if let Some(notes) = &current.auditor_notes {
                                        p { class: "text-sm", "{notes}" }
                                    }
                                    FindingActions {
                                        finding: current,
                                        on_change: move |_| findings.refetch(),
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some(company_id) = company_id {
                    div { class: "w-full max-w-2xl",
                        AuditActionPanel {
                            entity_id: company_id,
                            entity_type: EntityType::General,
                            on_recorded: move |_| findings.refetch(),
                        }
                    }
                }
            }
        }
    )
}
