use qualitrack::{
    error::SessionError,
    model::{assignment::AssignmentStatus, company::CompanySummary},
    storage::{selection::RestoreOutcome, KeyValueStore},
};
use qualitrack_test_utils::prelude::*;

/// Expect non-auditors to always see their home company, whatever storage holds
#[tokio::test]
async fn non_auditor_always_sees_home_company() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_stored_selection(factory::company("other"))
        .with_storage_entry("target_company", r#"{"id":"legacy","name":"Legacy"}"#)
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::company_user("member", "home")));
    let outcome = session.restore();

    assert_eq!(outcome, RestoreOutcome::Empty);
    assert_eq!(session.effective_company_id(), Some("home"));
    assert!(!session.is_auditor_mode());

    let refused = session.enter(factory::company("other"));
    assert_eq!(refused, Err(SessionError::NotAuditor("member".to_string())));
    assert_eq!(session.effective_company_id(), Some("home"));

    Ok(())
}

/// Expect a selection made with enter to survive into a fresh session
#[tokio::test]
async fn enter_survives_reload() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let company = CompanySummary::new("client", "Client").with_logo("https://cdn/logo.png");

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.enter(company.clone())?;
    drop(session);

    let mut reloaded = test.session(Some(factory::auditor("auditor")));
    assert_eq!(reloaded.effective_company_id(), None);

    let outcome = reloaded.restore();

    assert_eq!(outcome, RestoreOutcome::Restored(company.clone()));
    assert_eq!(reloaded.effective_company_id(), Some("client"));
    assert_eq!(reloaded.selection(), Some(&company));

    Ok(())
}

/// Expect exit to clear storage so a fresh session restores nothing
#[tokio::test]
async fn exit_clears_storage() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("target_company", r#"{"id":"legacy","name":"Legacy"}"#)
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    session.enter(factory::company("client"))?;
    session.exit();

    assert!(test.store.is_empty());

    let mut reloaded = test.session(Some(factory::auditor("auditor")));
    assert_eq!(reloaded.restore(), RestoreOutcome::Empty);
    assert_eq!(reloaded.effective_company_id(), None);

    Ok(())
}

/// Expect a lone legacy mode flag to restore nothing and remove both keys
#[tokio::test]
async fn mode_flag_without_company_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    let outcome = session.restore();

    assert!(matches!(outcome, RestoreOutcome::Cleared(_)));
    assert!(session.selection().is_none());
    assert!(test.store.get(&test.keys.legacy_auditor_mode).is_none());
    assert!(test.store.get(&test.keys.legacy_target_company).is_none());

    Ok(())
}

/// Expect a lone legacy mode flag to be removed at startup for a company user
#[tokio::test]
async fn mode_flag_cleared_for_company_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::company_user("member", "home")));
    let outcome = session.restore();

    assert!(matches!(outcome, RestoreOutcome::Cleared(_)));
    assert_eq!(session.effective_company_id(), Some("home"));
    assert!(test.store.is_empty());

    Ok(())
}

/// Expect a lone legacy mode flag to be removed at startup when signed out
#[tokio::test]
async fn mode_flag_cleared_when_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(None);
    let outcome = session.restore();

    assert!(matches!(outcome, RestoreOutcome::Cleared(_)));
    assert_eq!(session.effective_company_id(), None);
    assert!(test.store.get(&test.keys.legacy_auditor_mode).is_none());

    Ok(())
}

/// Expect a valid record to be kept, not applied, when a company user starts
#[tokio::test]
async fn valid_record_kept_for_company_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_stored_selection(factory::company("client"))
        .build()?;

    let mut member = test.session(Some(factory::company_user("member", "home")));
    assert_eq!(member.restore(), RestoreOutcome::Empty);
    assert!(test.store.get(&test.keys.auditor_selection).is_some());

    let mut auditor = test.session(Some(factory::auditor("auditor")));
    assert_eq!(
        auditor.restore(),
        RestoreOutcome::Restored(factory::company("client"))
    );

    Ok(())
}

/// Expect an unparsable legacy company payload to be cleared
#[tokio::test]
async fn corrupt_legacy_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("target_company", "{\"id\":")
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));

    assert!(matches!(session.restore(), RestoreOutcome::Cleared(_)));
    assert!(test.store.is_empty());

    Ok(())
}

/// Expect a complete legacy pair to be migrated and restored
#[tokio::test]
async fn legacy_pair_is_migrated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_storage_entry("target_company", r#"{"id":"client","name":"Client","logo_url":null}"#)
        .with_storage_entry("auditor_mode", "true")
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));

    assert!(matches!(session.restore(), RestoreOutcome::Migrated(_)));
    assert_eq!(session.effective_company_id(), Some("client"));
    assert!(test.store.get(&test.keys.auditor_selection).is_some());
    assert!(test.store.get(&test.keys.legacy_auditor_mode).is_none());

    Ok(())
}

/// Expect only active assignments within their window to be listed
#[tokio::test]
async fn lists_only_active_assignments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "active",
            "auditor",
            "c-1",
            AssignmentStatus::Scheduled,
        ))
        .with_assignment(factory::assignment(
            "completed",
            "auditor",
            "c-2",
            AssignmentStatus::Completed,
        ))
        .with_assignment(factory::assignment_window(
            "future",
            "auditor",
            "c-3",
            AssignmentStatus::Scheduled,
            3,
            None,
        ))
        .with_assignment(factory::assignment_window(
            "expired",
            "auditor",
            "c-4",
            AssignmentStatus::InProgress,
            -30,
            Some(-1),
        ))
        .with_assignment(factory::assignment_window(
            "ends-today",
            "auditor",
            "c-5",
            AssignmentStatus::InProgress,
            -30,
            Some(0),
        ))
        .with_assignment(factory::assignment(
            "someone-else",
            "other-auditor",
            "c-1",
            AssignmentStatus::InProgress,
        ))
        .build()?;

    let mut session = test.session(Some(factory::auditor("auditor")));
    let ids: Vec<String> = session
        .list_assignments(&test.backend, test.today)
        .await
        .iter()
        .map(|a| a.id.clone())
        .collect();

    assert_eq!(ids, vec!["active".to_string(), "ends-today".to_string()]);

    Ok(())
}

/// Expect a failed assignment fetch to degrade to an empty list
#[tokio::test]
async fn assignment_fetch_failure_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_assignment(factory::assignment(
            "active",
            "auditor",
            "c-1",
            AssignmentStatus::InProgress,
        ))
        .build()?;
    test.backend.fail(BackendOperation::ActiveAssignments);

    let mut session = test.session(Some(factory::auditor("auditor")));
    let assignments = session.list_assignments(&test.backend, test.today).await;

    assert!(assignments.is_empty());
    assert!(session.current_assignment_for("c-1").is_none());

    Ok(())
}

/// Expect no backend call when listing assignments for a non-auditor
#[tokio::test]
async fn non_auditor_lists_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let mut session = test.session(Some(factory::company_user("member", "home")));
    let assignments = session.list_assignments(&test.backend, test.today).await;

    assert!(assignments.is_empty());
    assert_eq!(test.backend.total_calls(), 0);

    Ok(())
}
