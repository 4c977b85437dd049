use dioxus::prelude::*;
use qualitrack::{
    audit::{fetch_open_findings, FindingsIndex},
    model::finding::EntityType,
};

use crate::client::store::{app::AppContext, auditor::AuditorContext};

/// Findings index of the effective company, owned by the calling component.
#[derive(Clone, Copy)]
pub struct AuditFindings {
    pub index: Signal<FindingsIndex>,
    resource: Resource<()>,
}

impl AuditFindings {
    /// Re-runs the whole load sequence, call after recording or answering a finding
    pub fn refetch(&mut self) {
        self.resource.restart();
    }

    pub fn is_loading(&self) -> bool {
        !self.resource.finished()
    }
}

/// Loads open findings for the effective company, optionally of one entity type.
///
/// The load re-runs whenever the effective company changes. Dropping the
/// component cancels an in-flight load, so a late response never writes into
/// an unmounted tree. Findings of the previous company are dropped as soon as
/// the company changes; a failed load keeps the last good index of the same
/// company and records a message on it.
pub fn use_audit_findings(entity_type: Option<EntityType>) -> AuditFindings {
    let app = use_context::<AppContext>();
    let auditor = use_context::<AuditorContext>();

    let effective_company = use_memo(move || auditor.effective_company_id());
    let mut index = use_signal(FindingsIndex::default);

    let resource = use_resource(move || {
        let backend = app.backend.clone();
        let company_id = effective_company();

        async move {
            index.with_mut(|index| index.begin_load(company_id.as_deref()));
            let result = fetch_open_findings(&backend, company_id.as_deref(), entity_type).await;
            index.with_mut(|index| index.apply(company_id.as_deref(), result));
        }
    });

    AuditFindings { index, resource }
}
