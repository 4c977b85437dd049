//! In-memory backend for tests.
//!
//! Applies the same filters the REST gateway applies, records how many times
//! each operation was called and can be told to fail an operation.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use chrono::NaiveDate;
use qualitrack::{
    backend::AuditBackend,
    error::BackendError,
    model::{
        api::ErrorDto,
        assignment::AuditAssignment,
        finding::{EntityType, Finding, FindingPatch, FindingStatus, NewFinding},
        identity::Identity,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOperation {
    FetchIdentity,
    ActiveAssignments,
    AssignmentIds,
    OpenFindings,
    InsertFinding,
    UpdateFinding,
}

#[derive(Default)]
struct State {
    identities: Vec<Identity>,
    assignments: Vec<AuditAssignment>,
    findings: Vec<Finding>,
    calls: HashMap<BackendOperation, usize>,
    failing: HashSet<BackendOperation>,
    next_id: usize,
}

/// Clones share state, so a test can keep a handle for assertions while the
/// code under test owns another.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_identity(&self, identity: Identity) {
        self.state.borrow_mut().identities.push(identity);
    }

    pub fn insert_assignment(&self, assignment: AuditAssignment) {
        self.state.borrow_mut().assignments.push(assignment);
    }

    /// Findings are returned in insertion order
    pub fn insert_finding_row(&self, finding: Finding) {
        self.state.borrow_mut().findings.push(finding);
    }

    /// Every finding row including closed ones
    pub fn finding_rows(&self) -> Vec<Finding> {
        self.state.borrow().findings.clone()
    }

    /// Makes `operation` fail with a 503 until [`Self::recover`] is called
    pub fn fail(&self, operation: BackendOperation) {
        self.state.borrow_mut().failing.insert(operation);
    }

    pub fn recover(&self, operation: BackendOperation) {
        self.state.borrow_mut().failing.remove(&operation);
    }

    pub fn calls(&self, operation: BackendOperation) -> usize {
        self.state
            .borrow()
            .calls
            .get(&operation)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_calls(&self) -> usize {
        self.state.borrow().calls.values().sum()
    }

    fn record(&self, operation: BackendOperation) -> Result<(), BackendError> {
        let mut state = self.state.borrow_mut();
        *state.calls.entry(operation).or_default() += 1;

        if state.failing.contains(&operation) {
            return Err(BackendError::Status {
                status: 503,
                error: ErrorDto {
                    message: format!("{:?} unavailable", operation),
                    ..Default::default()
                },
            });
        }

        Ok(())
    }
}

impl AuditBackend for FakeBackend {
    async fn fetch_identity(&self, user_id: &str) -> Result<Option<Identity>, BackendError> {
        self.record(BackendOperation::FetchIdentity)?;

        Ok(self
            .state
            .borrow()
            .identities
            .iter()
            .find(|identity| identity.id == user_id)
            .cloned())
    }

    async fn active_assignments(
        &self,
        auditor_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<AuditAssignment>, BackendError> {
        self.record(BackendOperation::ActiveAssignments)?;

        Ok(self
            .state
            .borrow()
            .assignments
            .iter()
            .filter(|a| a.auditor_id == auditor_id && a.is_active_on(today))
            .cloned()
            .collect())
    }

    async fn assignment_ids_for_company(
        &self,
        company_id: &str,
    ) -> Result<Vec<String>, BackendError> {
        self.record(BackendOperation::AssignmentIds)?;

        Ok(self
            .state
            .borrow()
            .assignments
            .iter()
            .filter(|a| a.company_id == company_id)
            .map(|a| a.id.clone())
            .collect())
    }

    async fn open_findings(
        &self,
        assignment_ids: &[String],
        entity_type: Option<EntityType>,
    ) -> Result<Vec<Finding>, BackendError> {
        self.record(BackendOperation::OpenFindings)?;

        Ok(self
            .state
            .borrow()
            .findings
            .iter()
            .filter(|f| assignment_ids.contains(&f.assignment_id))
            .filter(|f| f.status != FindingStatus::Closed)
            .filter(|f| entity_type.map_or(true, |t| f.entity_type == t))
            .cloned()
            .collect())
    }

    async fn insert_finding(&self, finding: &NewFinding) -> Result<Finding, BackendError> {
        self.record(BackendOperation::InsertFinding)?;

        let mut state = self.state.borrow_mut();
        state.next_id += 1;

        let created = Finding {
            id: format!("finding-{}", state.next_id),
            assignment_id: finding.assignment_id.clone(),
            entity_id: finding.entity_id.clone(),
            entity_type: finding.entity_type,
            severity: finding.severity,
            auditor_notes: finding.auditor_notes.clone(),
            status: finding.status,
            company_response: None,
            created_at: None,
            updated_at: None,
        };
        state.findings.push(created.clone());

        Ok(created)
    }

    async fn update_finding(
        &self,
        finding_id: &str,
        patch: &FindingPatch,
    ) -> Result<Finding, BackendError> {
        self.record(BackendOperation::UpdateFinding)?;

        let mut state = self.state.borrow_mut();
        let finding = state
            .findings
            .iter_mut()
            .find(|f| f.id == finding_id)
            .ok_or_else(|| BackendError::MissingRow(format!("finding {}", finding_id)))?;

        if let Some(status) = patch.status {
            finding.status = status;
        }
        if let Some(response) = &patch.company_response {
            finding.company_response = Some(response.clone());
        }
        if let Some(notes) = &patch.auditor_notes {
            finding.auditor_notes = Some(notes.clone());
        }

        Ok(finding.clone())
    }
}
