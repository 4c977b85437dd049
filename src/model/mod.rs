pub mod api;
pub mod assignment;
pub mod company;
pub mod finding;
pub mod identity;
