pub mod app;
pub mod auditor;
pub mod notice;
pub mod user;
