//! Auditor/company dual-context view model.
//!
//! [`AuditorSession`] decides whose data is in scope for the signed-in
//! identity, [`FindingsIndex`] maps open findings of that company onto the
//! business entities they annotate, and [`workflow`] holds the write paths
//! used to record and answer findings.

pub mod findings;
pub mod route_context;
pub mod session;
pub mod workflow;

pub use findings::{fetch_open_findings, FindingsIndex};
pub use route_context::{route_context_for, RouteContext};
pub use session::{fetch_active_assignments, AuditorSession};
