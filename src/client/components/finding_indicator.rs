use dioxus::prelude::*;
use qualitrack::{audit::FindingsIndex, model::finding::Finding};

use crate::client::components::FindingBadge;

/// Annotates an entity card with its current finding; renders nothing when the
/// entity has none.
#[component]
pub fn FindingIndicator(
    entity_id: String,
    findings: Signal<FindingsIndex>,
    onselect: Option<EventHandler<Finding>>,
) -> Element {
    let Some(finding) = findings.read().finding_for(&entity_id).cloned() else {
        return rsx!();
    };
    let others = findings.read().findings_for(&entity_id).len() - 1;

    rsx!(
        div { class: "flex items-center gap-1",
            FindingBadge { finding, onclick: onselect }
            if others > 0 {
                span { class: "text-xs opacity-60", "+{others}" }
            }
        }
    )
}
