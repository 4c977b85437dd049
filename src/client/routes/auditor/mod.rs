mod portal;

pub use portal::AuditorPortal;
