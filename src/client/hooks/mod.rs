pub mod use_audit_findings;

pub use use_audit_findings::{use_audit_findings, AuditFindings};
