use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleExclamation, FaLightbulb, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use qualitrack::model::finding::{Finding, FindingStatus, Severity};

/// Badge colour class for a severity
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::MajorNonconformity => "badge-error",
        Severity::MinorNonconformity => "badge-warning",
        Severity::ImprovementOpportunity => "badge-info",
        Severity::Compliant => "badge-success",
    }
}

#[component]
pub fn SeverityIcon(severity: Severity, size: u32) -> Element {
    match severity {
        Severity::MajorNonconformity => rsx!(Icon {
            width: size,
            height: size,
            icon: FaCircleExclamation
        }),
        Severity::MinorNonconformity => rsx!(Icon {
            width: size,
            height: size,
            icon: FaTriangleExclamation
        }),
        Severity::ImprovementOpportunity => rsx!(Icon {
            width: size,
            height: size,
            icon: FaLightbulb
        }),
        Severity::Compliant => rsx!(Icon {
            width: size,
            height: size,
            icon: FaCircleCheck
        }),
    }
}

/// Severity and status of a finding, with the auditor notes on hover.
#[component]
pub fn FindingBadge(finding: Finding, onclick: Option<EventHandler<Finding>>) -> Element {
    let severity = finding.severity;
    let class = severity_class(severity);
    let tooltip = finding
        .auditor_notes
        .clone()
        .unwrap_or_else(|| severity.label().to_string());
    let waiting = finding.status == FindingStatus::WaitingValidation;
    let weight = if severity.is_nonconformity() {
        "font-bold"
    } else {
        "badge-outline"
    };

    rsx!(
        div { class: "tooltip", "data-tip": "{tooltip}",
            button {
                class: "badge {class} {weight} gap-1 cursor-pointer",
                onclick: move |_| {
                    if let Some(handler) = &onclick {
                        handler.call(finding.clone());
                    }
                },
                SeverityIcon { severity, size: 12 }
                "{severity.label()}"
                if waiting {
                    span { class: "opacity-70", "· awaiting validation" }
                }
            }
        }
    )
}
