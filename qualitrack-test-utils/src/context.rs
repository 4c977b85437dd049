//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use chrono::NaiveDate;
use qualitrack::{
    audit::AuditorSession,
    model::identity::Identity,
    storage::{selection::SelectionStorage, MemoryStore, StorageKeys},
};

use crate::{backend::FakeBackend, constant::TEST_STORAGE_PREFIX, fixtures::factory};

/// Backend and durable storage shared by every session created from the context.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_assignment(factory::assignment("a-1", "auditor", "c-1", AssignmentStatus::InProgress))
///     .build();
///
/// let mut session = test.session(Some(factory::auditor("auditor")));
/// session.restore();
/// session.list_assignments(&test.backend, test.today).await;
/// ```
pub struct TestContext {
    pub backend: FakeBackend,
    /// Stands in for the browser's local storage, survives across sessions
    pub store: MemoryStore,
    pub keys: StorageKeys,
    pub today: NaiveDate,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        Self {
            backend: FakeBackend::new(),
            store: MemoryStore::new(),
            keys: StorageKeys::new(TEST_STORAGE_PREFIX),
            today: factory::today(),
        }
    }

    /// A fresh session over the shared store, as after an application reload.
    ///
    /// The session starts `Unset`; call `restore()` to model startup.
    pub fn session(&self, identity: Option<Identity>) -> AuditorSession<MemoryStore> {
        AuditorSession::new(
            identity,
            SelectionStorage::new(self.store.clone(), self.keys.clone()),
        )
    }

    pub fn selection_storage(&self) -> SelectionStorage<MemoryStore> {
        SelectionStorage::new(self.store.clone(), self.keys.clone())
    }
}
