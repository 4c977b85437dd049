pub mod auditor;
pub mod findings;
pub mod home;
pub mod not_found;

pub use findings::FindingsOverview;
pub use home::Home;
pub use not_found::NotFound;
