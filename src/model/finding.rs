use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Severity of a finding, declared worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "nao_conformidade_maior")]
    MajorNonconformity,
    #[serde(rename = "nao_conformidade_menor")]
    MinorNonconformity,
    #[serde(rename = "oportunidade_melhoria")]
    ImprovementOpportunity,
    #[serde(rename = "conforme")]
    Compliant,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::MajorNonconformity,
        Severity::MinorNonconformity,
        Severity::ImprovementOpportunity,
        Severity::Compliant,
    ];

    /// 0 for the worst severity, 3 for compliant
    pub fn rank(&self) -> u8 {
        match self {
            Self::MajorNonconformity => 0,
            Self::MinorNonconformity => 1,
            Self::ImprovementOpportunity => 2,
            Self::Compliant => 3,
        }
    }

    pub fn is_nonconformity(&self) -> bool {
        matches!(self, Self::MajorNonconformity | Self::MinorNonconformity)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MajorNonconformity => "nao_conformidade_maior",
            Self::MinorNonconformity => "nao_conformidade_menor",
            Self::ImprovementOpportunity => "oportunidade_melhoria",
            Self::Compliant => "conforme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MajorNonconformity => "Major nonconformity",
            Self::MinorNonconformity => "Minor nonconformity",
            Self::ImprovementOpportunity => "Improvement opportunity",
            Self::Compliant => "Compliant",
        }
    }
}

/// Workflow status of a finding: open, waiting validation, closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingStatus {
    #[serde(rename = "aberto")]
    Open,
    #[serde(rename = "aguardando_validacao")]
    WaitingValidation,
    #[serde(rename = "fechado")]
    Closed,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::WaitingValidation => "aguardando_validacao",
            Self::Closed => "fechado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::WaitingValidation => "Waiting validation",
            Self::Closed => "Closed",
        }
    }

    /// Allowed moves of the finding workflow
    ///
    /// - `Open -> WaitingValidation` when the company responds
    /// - `WaitingValidation -> Closed` when the auditor validates
    /// - `WaitingValidation -> Open` when the auditor rejects the response
    pub fn can_transition_to(&self, next: FindingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::WaitingValidation)
                | (Self::WaitingValidation, Self::Closed)
                | (Self::WaitingValidation, Self::Open)
        )
    }
}

/// Business entity tables a finding can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "documento")]
    Document,
    #[serde(rename = "risco")]
    Risk,
    #[serde(rename = "acao_corretiva")]
    CorrectiveAction,
    #[serde(rename = "fornecedor")]
    Supplier,
    #[serde(rename = "processo")]
    Process,
    #[serde(rename = "objetivo")]
    Objective,
    #[serde(rename = "treinamento")]
    Training,
    #[serde(rename = "auditoria")]
    Audit,
    #[serde(rename = "geral")]
    General,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "documento",
            Self::Risk => "risco",
            Self::CorrectiveAction => "acao_corretiva",
            Self::Supplier => "fornecedor",
            Self::Process => "processo",
            Self::Objective => "objetivo",
            Self::Training => "treinamento",
            Self::Audit => "auditoria",
            Self::General => "geral",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single auditor observation attached to one business entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub assignment_id: String,
    pub entity_id: String,
    pub entity_type: EntityType,
    pub severity: Severity,
    #[serde(default)]
    pub auditor_notes: Option<String>,
    pub status: FindingStatus,
    #[serde(default)]
    pub company_response: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Insert payload for a new finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFinding {
    pub assignment_id: String,
    pub entity_id: String,
    pub entity_type: EntityType,
    pub severity: Severity,
    pub auditor_notes: Option<String>,
    pub status: FindingStatus,
}

/// Partial update of a finding, unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FindingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditor_notes: Option<String>,
}

/// Histogram of findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub compliant: usize,
    pub opportunity: usize,
    pub minor_nonconformity: usize,
    pub major_nonconformity: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Compliant => self.compliant += 1,
            Severity::ImprovementOpportunity => self.opportunity += 1,
            Severity::MinorNonconformity => self.minor_nonconformity += 1,
            Severity::MajorNonconformity => self.major_nonconformity += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Compliant => self.compliant,
            Severity::ImprovementOpportunity => self.opportunity,
            Severity::MinorNonconformity => self.minor_nonconformity,
            Severity::MajorNonconformity => self.major_nonconformity,
        }
    }

    pub fn total(&self) -> usize {
        self.compliant + self.opportunity + self.minor_nonconformity + self.major_nonconformity
    }
}

impl<'a> FromIterator<&'a Finding> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = &'a Finding>>(iter: I) -> Self {
        let mut counts = SeverityCounts::default();
        for finding in iter {
            counts.add(finding.severity);
        }
        counts
    }
}
