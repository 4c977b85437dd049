use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No identity is signed in
    #[error("No user is signed in")]
    SignedOut,
    /// Only identities with the auditor role may select a company to view as
    #[error("User {0} is not an auditor and cannot enter auditor mode")]
    NotAuditor(String),
    /// No effective company is in scope for the session
    #[error("No company is selected")]
    NoCompany,
    /// Recording findings requires an active assignment for the company in scope
    #[error("No active audit assignment for company {0}")]
    NoActiveAssignment(String),
}
