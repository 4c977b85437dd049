//! Finding write paths.
//!
//! Auditors record findings against an entity of the company they are viewing;
//! company users respond; auditors validate (close) or reject (reopen) the
//! response. Workflow and input checks run before any backend call. Callers
//! refetch the [`FindingsIndex`](crate::audit::FindingsIndex) after a
//! successful write.

use dioxus_logger::tracing;

use crate::{
    audit::session::AuditorSession,
    backend::AuditBackend,
    error::{Error, FindingError, SessionError},
    model::finding::{EntityType, Finding, FindingPatch, FindingStatus, NewFinding, Severity},
    storage::KeyValueStore,
};

/// Input of the audit action panel form.
#[derive(Debug, Clone, PartialEq)]
pub struct FindingDraft {
    pub entity_id: String,
    pub entity_type: EntityType,
    pub severity: Severity,
    pub notes: String,
}

/// Validates `draft` against the session and builds the insert payload.
///
/// # Returns
/// - `Ok(NewFinding)` - Open finding bound to the active assignment of the viewed company
/// - `Err(SessionError::NotAuditor | SignedOut)` - Identity can't record findings
/// - `Err(SessionError::NoCompany)` - No company in scope
/// - `Err(SessionError::NoActiveAssignment)` - No active assignment for the company in scope
/// - `Err(FindingError::MissingText)` - Notes are empty for a non-compliant severity
pub fn new_finding<S: KeyValueStore>(
    session: &AuditorSession<S>,
    draft: FindingDraft,
) -> Result<NewFinding, Error> {
    let identity = session.identity().ok_or(SessionError::SignedOut)?;
    if !identity.is_auditor() {
        return Err(SessionError::NotAuditor(identity.id.clone()).into());
    }

    let company_id = session
        .effective_company_id()
        .ok_or(SessionError::NoCompany)?;
    let assignment = session
        .current_assignment_for(company_id)
        .ok_or_else(|| SessionError::NoActiveAssignment(company_id.to_string()))?;

    let notes = draft.notes.trim();
    if notes.is_empty() && draft.severity != Severity::Compliant {
        return Err(FindingError::MissingText("Auditor notes").into());
    }

    Ok(NewFinding {
        assignment_id: assignment.id.clone(),
        entity_id: draft.entity_id,
        entity_type: draft.entity_type,
        severity: draft.severity,
        auditor_notes: (!notes.is_empty()).then(|| notes.to_string()),
        status: FindingStatus::Open,
    })
}

pub async fn record_finding<B: AuditBackend>(
    backend: &B,
    finding: &NewFinding,
) -> Result<Finding, Error> {
    let created = backend.insert_finding(finding).await?;
    tracing::info!(
        "Recorded finding {} on {} {}",
        created.id,
        created.entity_type,
        created.entity_id
    );

    Ok(created)
}

/// Company response to an open finding, moves it to waiting validation.
pub async fn respond_to_finding<B: AuditBackend>(
    backend: &B,
    finding: &Finding,
    response: &str,
) -> Result<Finding, Error> {
    let response = response.trim();
    if response.is_empty() {
        return Err(FindingError::MissingText("Response").into());
    }

    transition(
        backend,
        finding,
        FindingPatch {
            status: Some(FindingStatus::WaitingValidation),
            company_response: Some(response.to_string()),
            auditor_notes: None,
        },
    )
    .await
}

/// Auditor accepts the response and closes the finding.
pub async fn validate_finding<B: AuditBackend>(
    backend: &B,
    finding: &Finding,
) -> Result<Finding, Error> {
    transition(
        backend,
        finding,
        FindingPatch {
            status: Some(FindingStatus::Closed),
            ..Default::default()
        },
    )
    .await
}

/// Auditor rejects the response and reopens the finding, optionally updating
/// the notes with the reason.
pub async fn reject_finding<B: AuditBackend>(
    backend: &B,
    finding: &Finding,
    notes: Option<&str>,
) -> Result<Finding, Error> {
    transition(
        backend,
        finding,
        FindingPatch {
            status: Some(FindingStatus::Open),
            auditor_notes: notes
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            company_response: None,
        },
    )
    .await
}

async fn transition<B: AuditBackend>(
    backend: &B,
    finding: &Finding,
    patch: FindingPatch,
) -> Result<Finding, Error> {
    if let Some(next) = patch.status {
        if !finding.status.can_transition_to(next) {
            return Err(FindingError::InvalidTransition {
                id: finding.id.clone(),
                from: finding.status,
                to: next,
            }
            .into());
        }
    }

    let updated = backend.update_finding(&finding.id, &patch).await?;
    tracing::info!(
        "Finding {} moved from {} to {}",
        finding.id,
        finding.status.label(),
        updated.status.label()
    );

    Ok(updated)
}
