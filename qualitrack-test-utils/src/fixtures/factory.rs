//! Factory functions for domain models.
//!
//! Pure functions returning models with standard test values. Dates are
//! expressed as day offsets from [`TEST_TODAY`](crate::constant::TEST_TODAY)
//! so "yesterday" and "next week" read naturally in tests.

use chrono::{Duration, NaiveDate};
use qualitrack::model::{
    assignment::{AssignmentStatus, AuditAssignment},
    company::CompanySummary,
    finding::{EntityType, Finding, FindingStatus, Severity},
    identity::{Identity, Role},
};

use crate::constant::TEST_TODAY;

pub fn today() -> NaiveDate {
    let (year, month, day) = TEST_TODAY;
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Date `offset` days from [`today`], negative for the past
pub fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

/// Auditor identity without a home company
pub fn auditor(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        role: Role::Auditor,
        home_company_id: None,
    }
}

/// Company member identity belonging to `company_id`
pub fn company_user(id: &str, company_id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        role: Role::CompanyUser,
        home_company_id: Some(company_id.to_string()),
    }
}

pub fn company(id: &str) -> CompanySummary {
    CompanySummary::new(id, format!("Company {}", id))
}

/// Open-ended assignment of `auditor_id` to `company_id` that started yesterday
///
/// # Arguments
/// - `id` - Assignment id
/// - `auditor_id` - Auditor identity id
/// - `company_id` - Audited company id
/// - `status` - Lifecycle status
pub fn assignment(
    id: &str,
    auditor_id: &str,
    company_id: &str,
    status: AssignmentStatus,
) -> AuditAssignment {
    AuditAssignment {
        id: id.to_string(),
        auditor_id: auditor_id.to_string(),
        company_id: company_id.to_string(),
        start_date: day(-1),
        end_date: None,
        status,
        notes: None,
        progress: 0.0,
        created_by: Some("admin".to_string()),
        created_at: None,
        updated_at: None,
        company: Some(company(company_id)),
    }
}

/// Same as [`assignment`] with an explicit window in day offsets from today
pub fn assignment_window(
    id: &str,
    auditor_id: &str,
    company_id: &str,
    status: AssignmentStatus,
    start_offset: i64,
    end_offset: Option<i64>,
) -> AuditAssignment {
    AuditAssignment {
        start_date: day(start_offset),
        end_date: end_offset.map(day),
        ..assignment(id, auditor_id, company_id, status)
    }
}

/// Finding against a document entity
pub fn finding(
    id: &str,
    assignment_id: &str,
    entity_id: &str,
    severity: Severity,
    status: FindingStatus,
) -> Finding {
    Finding {
        id: id.to_string(),
        assignment_id: assignment_id.to_string(),
        entity_id: entity_id.to_string(),
        entity_type: EntityType::Document,
        severity,
        auditor_notes: Some("Observed during document review".to_string()),
        status,
        company_response: None,
        created_at: None,
        updated_at: None,
    }
}

/// Same as [`finding`] for another entity type
pub fn finding_of_type(
    id: &str,
    assignment_id: &str,
    entity_id: &str,
    entity_type: EntityType,
    severity: Severity,
) -> Finding {
    Finding {
        entity_type,
        ..finding(id, assignment_id, entity_id, severity, FindingStatus::Open)
    }
}
