use dioxus_logger::tracing;

use crate::{error::StorageError, storage::KeyValueStore};

/// The browser's `window.localStorage`.
///
/// Every call looks the storage up again, so a store that becomes unavailable
/// (private browsing quota, sandboxed iframe) degrades to "no value" on reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;

        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("Local storage unavailable, could not remove {}", key);
            return;
        };

        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {} from local storage: {:?}", key, e);
        }
    }
}
