use dioxus::prelude::*;
use qualitrack::{audit::FindingsIndex, model::finding::Severity};

use crate::client::components::finding_badge::{severity_class, SeverityIcon};

/// Count of open findings per severity
#[component]
pub fn SeveritySummary(findings: Signal<FindingsIndex>) -> Element {
    let counts = findings.read().severity_counts();

    rsx!(
        div { class: "stats shadow",
            for severity in Severity::ALL {
                div { class: "stat",
                    div { class: "stat-figure badge {severity_class(severity)}",
                        SeverityIcon { severity, size: 16 }
                    }
                    div { class: "stat-title", "{severity.label()}" }
                    div { class: "stat-value", "{counts.get(severity)}" }
                }
            }
        }
    )
}
