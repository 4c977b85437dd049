//! End to end scenarios of an auditor working in a client company.

use qualitrack::{
    audit::FindingsIndex,
    model::{
        assignment::AssignmentStatus,
        finding::{FindingStatus, Severity},
    },
};
use qualitrack_test_utils::prelude::*;

/// Expect an auditor with one open-ended assignment to list it, enter the
/// company and resolve the assignment for recording findings
#[tokio::test]
async fn auditor_enters_assigned_company() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_identity(factory::auditor("U"))
        .with_assignment(factory::assignment_window(
            "assignment-U-C",
            "U",
            "C",
            AssignmentStatus::InProgress,
            -1,
            None,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("U")));
    session.restore();

    let assignments = session.list_assignments(&test.backend, test.today).await;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].id, "assignment-U-C");

    let company = assignments[0].target_company();
    session.enter(company)?;

    assert_eq!(session.effective_company_id(), Some("C"));
    assert_eq!(
        session.current_assignment_for("C").map(|a| a.id.as_str()),
        Some("assignment-U-C")
    );
    assert_eq!(
        session.current_assignment().map(|a| a.id.as_str()),
        Some("assignment-U-C")
    );

    Ok(())
}

/// Expect a closed compliant finding to be excluded while the open minor
/// nonconformity on the same document is shown and counted
#[tokio::test]
async fn closed_finding_is_invisible() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "U",
            "C",
            AssignmentStatus::InProgress,
        ))
        .with_finding(factory::finding(
            "closed",
            "a-1",
            "D",
            Severity::Compliant,
            FindingStatus::Closed,
        ))
        .with_finding(factory::finding(
            "open",
            "a-1",
            "D",
            Severity::MinorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("U")));
    session.enter(factory::company("C"))?;

    let mut index = FindingsIndex::default();
    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;

    let shown = index.finding_for("D").expect("finding for D");
    assert_eq!(shown.id, "open");
    assert_eq!(shown.severity, Severity::MinorNonconformity);
    assert_eq!(index.findings_for("D").len(), 1);

    let counts = index.severity_counts();
    assert_eq!(counts.compliant, 0);
    assert_eq!(counts.minor_nonconformity, 1);
    assert_eq!(counts.total(), 1);

    Ok(())
}

/// Expect a company user to see findings recorded in their own company
#[tokio::test]
async fn company_user_sees_own_findings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "a-1",
            "U",
            "C",
            AssignmentStatus::InProgress,
        ))
        .with_finding(factory::finding(
            "f-1",
            "a-1",
            "D",
            Severity::MajorNonconformity,
            FindingStatus::Open,
        ))
        .build()?;

    let session = test.session(Some(factory::company_user("member", "C")));

    let mut index = FindingsIndex::default();
    index
        .load(&test.backend, session.effective_company_id(), None)
        .await;

    assert!(index.has_finding("D"));

    Ok(())
}
