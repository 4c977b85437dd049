use qualitrack::{
    audit::{
        workflow::{
            new_finding, record_finding, reject_finding, respond_to_finding, validate_finding,
            FindingDraft,
        },
        FindingsIndex,
    },
    error::{Error, FindingError, SessionError},
    model::{
        assignment::AssignmentStatus,
        finding::{EntityType, FindingStatus, Severity},
    },
};
use qualitrack_test_utils::prelude::*;

fn draft(severity: Severity, notes: &str) -> FindingDraft {
    FindingDraft {
        entity_id: "doc-1".to_string(),
        entity_type: EntityType::Document,
        severity,
        notes: notes.to_string(),
    }
}

fn test_with_open_finding(status: FindingStatus) -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "auditor",
            "company",
            AssignmentStatus::InProgress,
        ))
        .with_finding(factory::finding(
            "f-1",
            "a-1",
            "doc-1",
            Severity::MinorNonconformity,
            status,
        ))
        .build()
}

/// Expect a recorded finding to appear on the entity after a refetch
#[tokio::test]
async fn record_then_refetch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "auditor",
            "company",
            AssignmentStatus::InProgress,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.list_assignments(&test.backend, test.today).await;
    session.enter(factory::company("company"))?;

    let mut index = FindingsIndex::default();
    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;
    assert!(!index.has_finding("doc-1"));

    let new = new_finding(
        &session,
        draft(Severity::MajorNonconformity, "  Approval record missing  "),
    )?;
    assert_eq!(new.assignment_id, "a-1");
    assert_eq!(new.status, FindingStatus::Open);
    assert_eq!(new.auditor_notes.as_deref(), Some("Approval record missing"));

    record_finding(&test.backend, &new).await?;

    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;
    let shown = index.finding_for("doc-1").expect("recorded finding");
    assert_eq!(shown.severity, Severity::MajorNonconformity);

    Ok(())
}

/// Expect recording to be unavailable without an assignment for the viewed company
#[tokio::test]
async fn record_requires_active_assignment() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.list_assignments(&test.backend, test.today).await;
    session.enter(factory::company("company"))?;

    let result = new_finding(&session, draft(Severity::MinorNonconformity, "notes"));

    assert!(matches!(
        result,
        Err(Error::SessionError(SessionError::NoActiveAssignment(ref company))) if company == "company"
    ));

    Ok(())
}

/// Expect company users to be refused when recording findings
#[tokio::test]
async fn record_requires_auditor() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let session = test.session(Some(factory::company_user("member", "company")));
    let result = new_finding(&session, draft(Severity::MinorNonconformity, "notes"));

    assert!(matches!(
        result,
        Err(Error::SessionError(SessionError::NotAuditor(_)))
    ));

    Ok(())
}

/// Expect notes to be required except for compliant findings
#[tokio::test]
async fn notes_required_for_nonconformities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "auditor",
            "company",
            AssignmentStatus::Scheduled,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.list_assignments(&test.backend, test.today).await;
    session.enter(factory::company("company"))?;

    let missing = new_finding(&session, draft(Severity::MinorNonconformity, "   "));
    let compliant = new_finding(&session, draft(Severity::Compliant, ""))?;

    assert!(matches!(
        missing,
        Err(Error::FindingError(FindingError::MissingText(_)))
    ));
    assert!(compliant.auditor_notes.is_none());

    Ok(())
}

/// Expect response, rejection and validation to walk the workflow
#[tokio::test]
async fn respond_reject_validate() -> Result<(), TestError> {
    let test = test_with_open_finding(FindingStatus::Open)?;
    let finding = test.backend.finding_rows().remove(0);

    let responded = respond_to_finding(&test.backend, &finding, "Procedure revised").await?;
    assert_eq!(responded.status, FindingStatus::WaitingValidation);
    assert_eq!(responded.company_response.as_deref(), Some("Procedure revised"));

    let rejected = reject_finding(&test.backend, &responded, Some("Evidence missing")).await?;
    assert_eq!(rejected.status, FindingStatus::Open);
    assert_eq!(rejected.auditor_notes.as_deref(), Some("Evidence missing"));

    let responded = respond_to_finding(&test.backend, &rejected, "Evidence attached").await?;
    let closed = validate_finding(&test.backend, &responded).await?;
    assert_eq!(closed.status, FindingStatus::Closed);

    let mut index = FindingsIndex::default();
    index.load(&test.backend, Some("company"), None).await;
    assert!(!index.has_finding("doc-1"));

    Ok(())
}

/// Expect invalid transitions to be refused without a backend call
#[tokio::test]
async fn invalid_transition_is_local() -> Result<(), TestError> {
    let test = test_with_open_finding(FindingStatus::Open)?;
    let finding = test.backend.finding_rows().remove(0);

    let result = validate_finding(&test.backend, &finding).await;

    assert!(matches!(
        result,
        Err(Error::FindingError(FindingError::InvalidTransition {
            from: FindingStatus::Open,
            to: FindingStatus::Closed,
            ..
        }))
    ));
    assert_eq!(test.backend.calls(BackendOperation::UpdateFinding), 0);

    Ok(())
}

/// Expect an empty response to be refused
#[tokio::test]
async fn empty_response_is_refused() -> Result<(), TestError> {
    let test = test_with_open_finding(FindingStatus::Open)?;
    let finding = test.backend.finding_rows().remove(0);

    let result = respond_to_finding(&test.backend, &finding, "  ").await;

    assert!(matches!(
        result,
        Err(Error::FindingError(FindingError::MissingText(_)))
    ));
    assert_eq!(test.backend.calls(BackendOperation::UpdateFinding), 0);

    Ok(())
}

/// Expect a backend failure on a write to be returned to the caller
#[tokio::test]
async fn write_failure_propagates() -> Result<(), TestError> {
    let test = test_with_open_finding(FindingStatus::WaitingValidation)?;
    let finding = test.backend.finding_rows().remove(0);
    test.backend.fail(BackendOperation::UpdateFinding);

    let result = validate_finding(&test.backend, &finding).await;

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert_eq!(test.backend.finding_rows()[0].status, FindingStatus::WaitingValidation);

    Ok(())
}
