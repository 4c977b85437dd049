use qualitrack::{backend::RestBackend, storage::StorageKeys};

/// Immutable per-launch context: storage keys and the backend client bound to
/// the signed-in user's token.
#[derive(Clone)]
pub struct AppContext {
    pub keys: StorageKeys,
    pub backend: RestBackend,
}
