use dioxus_logger::tracing;

use crate::{model::identity::AuthSession, storage::KeyValueStore};

/// Reads the auth session written by the external auth provider.
///
/// A malformed entry is treated as signed out.
pub fn read_auth_session<S: KeyValueStore>(store: &S, key: &str) -> Option<AuthSession> {
    let raw = store.get(key)?;

    match serde_json::from_str::<AuthSession>(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Ignoring malformed auth session in storage: {}", e);
            None
        }
    }
}

pub fn clear_auth_session<S: KeyValueStore>(store: &S, key: &str) {
    store.remove(key);
}
