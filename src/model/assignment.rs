use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::company::CompanySummary;

/// Lifecycle status of an auditor to company assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[serde(rename = "agendada")]
    Scheduled,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "concluida")]
    Completed,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl AssignmentStatus {
    /// Statuses for which an assignment can grant auditor context
    pub const ACTIVE: [AssignmentStatus; 2] =
        [AssignmentStatus::Scheduled, AssignmentStatus::InProgress];

    /// Value stored by the backend for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "agendada",
            Self::InProgress => "em_andamento",
            Self::Completed => "concluida",
            Self::Cancelled => "cancelada",
        }
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Relation between one auditor and one company for a validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditAssignment {
    pub id: String,
    pub auditor_id: String,
    pub company_id: String,
    pub start_date: NaiveDate,
    /// `None` is an open-ended window
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Company row embedded by the assignment listing query
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

impl AuditAssignment {
    /// Returns true if `today` falls within `[start_date, end_date or infinity]`
    pub fn covers(&self, today: NaiveDate) -> bool {
        self.start_date <= today && self.end_date.map_or(true, |end| today <= end)
    }

    /// An assignment grants auditor context only while scheduled or in progress
    /// and within its date window.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.status.is_active() && self.covers(today)
    }

    /// Company to enter when the auditor picks this assignment, falling back to
    /// the bare company id when the company row wasn't embedded.
    pub fn target_company(&self) -> CompanySummary {
        self.company
            .clone()
            .unwrap_or_else(|| CompanySummary::new(self.company_id.clone(), self.company_id.clone()))
    }
}
