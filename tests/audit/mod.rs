//! Integration tests for the auditor session, findings index and finding
//! workflow against the in-memory backend.

mod findings;
mod scenarios;
mod session;
mod workflow;
