//! Entity to finding lookup for the company in scope.
//!
//! An entity can carry several open findings (across assignments or over
//! time). The index keeps all of them per entity in fetch order, and
//! [`current_finding`] picks the one shown on the entity: the last one
//! fetched. Findings arrive ordered by creation time, so that is the most
//! recent open finding.

use std::collections::HashMap;

use dioxus_logger::tracing;

use crate::{
    backend::AuditBackend,
    error::BackendError,
    model::finding::{EntityType, Finding, FindingStatus, SeverityCounts},
};

/// Message kept on the index when a refresh fails
pub const LOAD_FAILED_MESSAGE: &str = "Could not load audit findings.";

/// Display selector for an entity's findings history (fetch order): the last one wins.
pub fn current_finding(history: &[Finding]) -> Option<&Finding> {
    history.last()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindingsIndex {
    /// Company the held findings belong to
    company_id: Option<String>,
    findings: Vec<Finding>,
    by_entity: HashMap<String, Vec<Finding>>,
    error: Option<String>,
    loaded: bool,
}

impl FindingsIndex {
    /// Builds an index from findings in fetch order, ignoring closed ones.
    pub fn build(findings: Vec<Finding>) -> Self {
        let findings: Vec<Finding> = findings
            .into_iter()
            .filter(|finding| finding.status != FindingStatus::Closed)
            .collect();

        let mut by_entity: HashMap<String, Vec<Finding>> = HashMap::new();
        for finding in &findings {
            by_entity
                .entry(finding.entity_id.clone())
                .or_default()
                .push(finding.clone());
        }

        Self {
            company_id: None,
            findings,
            by_entity,
            error: None,
            loaded: true,
        }
    }

    /// Company of the last load, `None` before any load or when no company is in scope
    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }

    /// Prepares a load for `company_id`.
    ///
    /// Findings held for another company are dropped and the index goes back
    /// to not loaded, so they never show under the new company while it loads
    /// or after its load fails.
    pub fn begin_load(&mut self, company_id: Option<&str>) {
        if self.company_id.as_deref() != company_id {
            *self = Self {
                company_id: company_id.map(str::to_string),
                ..Self::default()
            };
        }
    }

    pub fn has_finding(&self, entity_id: &str) -> bool {
        self.by_entity.contains_key(entity_id)
    }

    /// Finding displayed for `entity_id`, see [`current_finding`]
    pub fn finding_for(&self, entity_id: &str) -> Option<&Finding> {
        current_finding(self.by_entity.get(entity_id)?)
    }

    /// Every open finding of `entity_id` in fetch order
    pub fn findings_for(&self, entity_id: &str) -> &[Finding] {
        self.by_entity
            .get(entity_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Flat list of open findings in fetch order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Histogram over the flat list.
    ///
    /// Not deduplicated per entity: an entity with two open findings counts
    /// twice here while only one is displayed on it.
    pub fn severity_counts(&self) -> SeverityCounts {
        self.findings.iter().collect()
    }

    /// Number of open findings
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of distinct annotated entities
    pub fn entity_count(&self) -> usize {
        self.by_entity.len()
    }

    /// False until the first successful load
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Message of the last failed refresh, cleared by the next successful one
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Applies a fetch result for `company_id`.
    ///
    /// On success the index is rebuilt. On failure the last known good
    /// findings of the same company are kept and a user displayable message
    /// is stored; nothing of another company survives.
    pub fn apply(&mut self, company_id: Option<&str>, result: Result<Vec<Finding>, BackendError>) {
        self.begin_load(company_id);

        match result {
            Ok(findings) => {
                *self = Self {
                    company_id: company_id.map(str::to_string),
                    ..Self::build(findings)
                };
                tracing::debug!(
                    "Indexed {} open findings across {} entities",
                    self.len(),
                    self.entity_count()
                );
            }
            Err(e) => {
                tracing::error!("Failed to load audit findings: {}", e);
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Runs the whole load sequence and applies its result.
    ///
    /// Also serves as `refetch`: findings are pulled, so callers invoke this
    /// again after recording or answering a finding.
    pub async fn load<B: AuditBackend>(
        &mut self,
        backend: &B,
        company_id: Option<&str>,
        entity_type: Option<EntityType>,
    ) {
        self.begin_load(company_id);
        let result = fetch_open_findings(backend, company_id, entity_type).await;
        self.apply(company_id, result);
    }
}

/// Open findings of every assignment of `company_id`.
///
/// # Behavior
/// - No company in scope: `Ok(vec![])` without any backend call
/// - Company without assignments: `Ok(vec![])` after only the assignment id lookup
/// - Otherwise the non-closed findings of all of the company's assignments,
///   including completed and cancelled ones, optionally of one entity type
pub async fn fetch_open_findings<B: AuditBackend>(
    backend: &B,
    company_id: Option<&str>,
    entity_type: Option<EntityType>,
) -> Result<Vec<Finding>, BackendError> {
    let Some(company_id) = company_id else {
        return Ok(Vec::new());
    };

    let assignment_ids = backend.assignment_ids_for_company(company_id).await?;
    if assignment_ids.is_empty() {
        return Ok(Vec::new());
    }

    backend.open_findings(&assignment_ids, entity_type).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::finding::Severity;

    fn finding(id: &str, entity_id: &str, severity: Severity, status: FindingStatus) -> Finding {
        Finding {
            id: id.to_string(),
            assignment_id: "a-1".to_string(),
            entity_id: entity_id.to_string(),
            entity_type: EntityType::Document,
            severity,
            auditor_notes: None,
            status,
            company_response: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Expect the last fetched finding to be displayed while the histogram counts both
    #[test]
    fn last_fetched_wins() {
        let index = FindingsIndex::build(vec![
            finding("f-1", "A", Severity::MinorNonconformity, FindingStatus::Open),
            finding("f-2", "A", Severity::MajorNonconformity, FindingStatus::Open),
        ]);

        assert_eq!(index.finding_for("A").unwrap().id, "f-2");
        assert_eq!(index.findings_for("A").len(), 2);
        assert_eq!(index.entity_count(), 1);

        let counts = index.severity_counts();
        assert_eq!(counts.minor_nonconformity, 1);
        assert_eq!(counts.major_nonconformity, 1);
        assert_eq!(counts.total(), 2);
    }

    /// Expect closed findings to be left out of map and histogram
    #[test]
    fn closed_findings_are_ignored() {
        let index = FindingsIndex::build(vec![
            finding("f-1", "D", Severity::Compliant, FindingStatus::Closed),
            finding("f-2", "D", Severity::MinorNonconformity, FindingStatus::Open),
        ]);

        assert_eq!(index.findings_for("D").len(), 1);
        assert_eq!(index.finding_for("D").unwrap().id, "f-2");
        assert_eq!(index.severity_counts().compliant, 0);
    }

    /// Expect missing entities to be silent
    #[test]
    fn absent_entity() {
        let index = FindingsIndex::build(Vec::new());

        assert!(!index.has_finding("X"));
        assert!(index.finding_for("X").is_none());
        assert!(index.findings_for("X").is_empty());
        assert!(index.is_loaded());
    }

    /// Expect a failed refresh to keep the previous findings and store a message
    #[test]
    fn failure_keeps_last_good_state() {
        let mut index = FindingsIndex::build(vec![finding(
            "f-1",
            "A",
            Severity::MinorNonconformity,
            FindingStatus::Open,
        )]);

        index.apply(None, Err(BackendError::Request("offline".to_string())));

        assert!(index.has_finding("A"));
        assert_eq!(index.last_error(), Some(LOAD_FAILED_MESSAGE));

        index.apply(None, Ok(Vec::new()));

        assert!(!index.has_finding("A"));
        assert!(index.last_error().is_none());
    }

    /// Expect a failure before any successful load to leave the index unloaded
    #[test]
    fn failure_before_first_load() {
        let mut index = FindingsIndex::default();

        index.apply(None, Err(BackendError::Request("offline".to_string())));

        assert!(!index.is_loaded());
        assert!(index.is_empty());
        assert!(index.last_error().is_some());
    }

    /// Expect a result for another company to replace, not merge with, held findings
    #[test]
    fn company_switch_drops_previous_findings() {
        let mut index = FindingsIndex::default();
        index.apply(
            Some("A"),
            Ok(vec![finding(
                "f-1",
                "doc-a",
                Severity::MajorNonconformity,
                FindingStatus::Open,
            )]),
        );
        assert_eq!(index.company_id(), Some("A"));

        index.begin_load(Some("B"));

        assert_eq!(index.company_id(), Some("B"));
        assert!(!index.is_loaded());
        assert!(!index.has_finding("doc-a"));

        index.apply(Some("B"), Err(BackendError::Request("offline".to_string())));

        assert!(index.is_empty());
        assert_eq!(index.severity_counts().total(), 0);
        assert_eq!(index.last_error(), Some(LOAD_FAILED_MESSAGE));
    }
}
