//! Adapter for the external backend platform.
//!
//! All persistence, authorization and row scoping live in the managed backend.
//! The client only issues request/response calls through [`AuditBackend`]; the
//! production implementation is [`RestBackend`], which talks to the platform's
//! REST gateway.

pub mod query;
pub mod rest;

use chrono::NaiveDate;

use crate::{
    error::BackendError,
    model::{
        assignment::AuditAssignment,
        finding::{EntityType, Finding, FindingPatch, NewFinding},
        identity::Identity,
    },
};

pub use query::RestQuery;
pub use rest::RestBackend;

/// Backend operations consumed by the auditor session, findings index and
/// finding workflow.
///
/// Every read treats an empty result set as a normal outcome (`Ok(vec![])`).
/// The client is single threaded so the returned futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuditBackend {
    /// Profile row of the signed-in user, `None` if no profile exists
    async fn fetch_identity(&self, user_id: &str) -> Result<Option<Identity>, BackendError>;

    /// Assignments of `auditor_id` that are scheduled or in progress and whose
    /// date window covers `today`
    async fn active_assignments(
        &self,
        auditor_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<AuditAssignment>, BackendError>;

    /// Ids of every assignment of `company_id`, regardless of auditor or status
    async fn assignment_ids_for_company(
        &self,
        company_id: &str,
    ) -> Result<Vec<String>, BackendError>;

    /// Findings of the given assignments that are not closed, optionally
    /// restricted to one entity type
    async fn open_findings(
        &self,
        assignment_ids: &[String],
        entity_type: Option<EntityType>,
    ) -> Result<Vec<Finding>, BackendError>;

    async fn insert_finding(&self, finding: &NewFinding) -> Result<Finding, BackendError>;

    async fn update_finding(
        &self,
        finding_id: &str,
        patch: &FindingPatch,
    ) -> Result<Finding, BackendError>;
}
