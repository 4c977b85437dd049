//! Qualitrack client core.
//!
//! Platform-independent logic behind the ISO 9001 quality management UI: the
//! auditor/company dual-context session, the findings index used to annotate
//! business entities, the finding workflow write paths, and the adapters for
//! the external backend and the browser's durable storage.

pub mod audit;
pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
