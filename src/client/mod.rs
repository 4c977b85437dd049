pub mod app;
pub mod components;
pub mod hooks;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;

/// Version shown in the navbar and on the start page
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
