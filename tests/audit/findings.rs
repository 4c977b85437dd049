use qualitrack::{
    audit::{fetch_open_findings, findings::LOAD_FAILED_MESSAGE, FindingsIndex},
    model::{
        assignment::AssignmentStatus,
        finding::{EntityType, FindingStatus, Severity},
    },
};
use qualitrack_test_utils::prelude::*;

fn builder_with_assignment() -> TestBuilder {
    TestBuilder::new().with_assignment(factory::assignment(
        "a-1",
        "auditor",
        "company",
        AssignmentStatus::InProgress,
    ))
}

/// Expect the later of two open findings on one entity to be displayed and both counted
#[tokio::test]
async fn duplicate_open_findings_last_wins() -> Result<(), TestError> {
    let test = builder_with_assignment()
        .with_finding(factory::finding(
            "first",
            "a-1",
            "A",
            Severity::ImprovementOpportunity,
            FindingStatus::Open,
        ))
        .with_finding(factory::finding(
            "second",
            "a-1",
            "A",
            Severity::MinorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let mut index = FindingsIndex::default();
    index.load(&test.backend, Some("company"), None).await;

    assert_eq!(index.finding_for("A").map(|f| f.id.as_str()), Some("second"));

    let counts = index.severity_counts();
    assert_eq!(counts.total(), 2);
    assert_eq!(counts.opportunity, 1);
    assert_eq!(counts.minor_nonconformity, 1);

    Ok(())
}

/// Expect no backend call without a company in scope
#[tokio::test]
async fn no_company_no_calls() -> Result<(), TestError> {
    let test = builder_with_assignment().build()?;

    let mut index = FindingsIndex::default();
    index.load(&test.backend, None, None).await;

    assert!(index.is_empty());
    assert!(index.is_loaded());
    assert_eq!(test.backend.total_calls(), 0);

    Ok(())
}

/// Expect a single assignment id lookup for a company without assignments
#[tokio::test]
async fn company_without_assignments_skips_findings_call() -> Result<(), TestError> {
    let test = builder_with_assignment().build()?;

    let findings = fetch_open_findings(&test.backend, Some("unassigned"), None).await;

    assert!(findings.is_ok_and(|findings| findings.is_empty()));
    assert_eq!(test.backend.calls(BackendOperation::AssignmentIds), 1);
    assert_eq!(test.backend.calls(BackendOperation::OpenFindings), 0);

    Ok(())
}

/// Expect findings from completed assignments of the company to be included
#[tokio::test]
async fn includes_findings_of_finished_assignments() -> Result<(), TestError> {
    let test = builder_with_assignment()
        .with_assignment(factory::assignment(
            "old",
            "former-auditor",
            "company",
            AssignmentStatus::Completed,
        ))
        .with_assignment(factory::assignment(
            "elsewhere",
            "auditor",
            "other-company",
            AssignmentStatus::InProgress,
        ))
        .with_finding(factory::finding(
            "old-finding",
            "old",
            "doc-1",
            Severity::MajorNonconformity,
            FindingStatus::Open,
        ))
        .with_finding(factory::finding(
            "foreign",
            "elsewhere",
            "doc-2",
            Severity::MajorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let mut index = FindingsIndex::default();
    index.load(&test.backend, Some("company"), None).await;

    assert!(index.has_finding("doc-1"));
    assert!(!index.has_finding("doc-2"));

    Ok(())
}

/// Expect the entity type filter to restrict the index
#[tokio::test]
async fn entity_type_filter() -> Result<(), TestError> {
    let test = builder_with_assignment()
        .with_finding(factory::finding_of_type(
            "risk-finding",
            "a-1",
            "risk-1",
            EntityType::Risk,
            Severity::MinorNonconformity,
        ))
        .with_finding(factory::finding_of_type(
            "doc-finding",
            "a-1",
            "doc-1",
            EntityType::Document,
            Severity::MinorNonconformity,
        ))
        .build()?;

    let mut index = FindingsIndex::default();
    index
        .load(&test.backend, Some("company"), Some(EntityType::Risk))
        .await;

    assert!(index.has_finding("risk-1"));
    assert!(!index.has_finding("doc-1"));
    assert_eq!(index.len(), 1);

    Ok(())
}

/// Expect a failed refresh to keep the indicators already loaded
#[tokio::test]
async fn refresh_failure_keeps_last_good_state() -> Result<(), TestError> {
    let test = builder_with_assignment()
        .with_finding(factory::finding(
            "f-1",
            "a-1",
            "doc-1",
            Severity::MinorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let mut index = FindingsIndex::default();
    index.load(&test.backend, Some("company"), None).await;
    assert!(index.has_finding("doc-1"));

    test.backend.fail(BackendOperation::OpenFindings);
    index.load(&test.backend, Some("company"), None).await;

    assert!(index.has_finding("doc-1"));
    assert_eq!(index.last_error(), Some(LOAD_FAILED_MESSAGE));

    test.backend.recover(BackendOperation::OpenFindings);
    index.load(&test.backend, Some("company"), None).await;

    assert!(index.last_error().is_none());

    Ok(())
}

/// Expect findings of the previously viewed company to vanish when its successor fails to load
#[tokio::test]
async fn company_switch_never_shows_previous_findings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "auditor",
            "A",
            AssignmentStatus::InProgress,
        ))
        .with_assignment(factory::assignment(
            "a-2",
            "auditor",
            "B",
            AssignmentStatus::InProgress,
        ))
        .with_finding(factory::finding(
            "f-1",
            "a-1",
            "doc-a",
            Severity::MajorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.enter(factory::company("A"))?;

    let mut index = FindingsIndex::default();
    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;
    assert!(index.has_finding("doc-a"));

    session.enter(factory::company("B"))?;
    test.backend.fail(BackendOperation::OpenFindings);
    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;

    assert_eq!(index.company_id(), Some("B"));
    assert!(!index.has_finding("doc-a"));
    assert_eq!(index.severity_counts().total(), 0);
    assert_eq!(index.last_error(), Some(LOAD_FAILED_MESSAGE));

    Ok(())
}
