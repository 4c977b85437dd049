//! Persisted auditor selection.
//!
//! The company an auditor is viewing as is stored as one versioned record so a
//! reload can put them back where they were. Older clients wrote two separate
//! keys (company payload and a mode flag); those are still read once and
//! migrated, and a partial pair is discarded.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    error::StorageError,
    model::company::CompanySummary,
    storage::{KeyValueStore, StorageKeys},
};

pub const SELECTION_RECORD_VERSION: u32 = 1;

/// Value of the legacy mode key while auditor mode is active
const LEGACY_MODE_ACTIVE: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub version: u32,
    pub company_id: String,
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub active: bool,
}

impl SelectionRecord {
    pub fn active(company: &CompanySummary) -> Self {
        Self {
            version: SELECTION_RECORD_VERSION,
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            logo_url: company.logo_url.clone(),
            active: true,
        }
    }

    pub fn company(&self) -> CompanySummary {
        CompanySummary {
            id: self.company_id.clone(),
            name: self.company_name.clone(),
            logo_url: self.logo_url.clone(),
        }
    }
}

/// Company payload written under the legacy target company key
#[derive(Deserialize)]
struct LegacyTargetCompany {
    id: String,
    name: String,
    #[serde(default)]
    logo_url: Option<String>,
}

/// Result of reading the persisted selection at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing was stored
    Empty,
    /// A valid record was found
    Restored(CompanySummary),
    /// A complete legacy key pair was found and rewritten as a record
    Migrated(CompanySummary),
    /// Stored state was partial or corrupt and has been removed
    Cleared(String),
}

impl RestoreOutcome {
    pub fn selection(&self) -> Option<&CompanySummary> {
        match self {
            Self::Restored(company) | Self::Migrated(company) => Some(company),
            Self::Empty | Self::Cleared(_) => None,
        }
    }
}

pub struct SelectionStorage<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SelectionStorage<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Persists `company` as the active selection.
    ///
    /// # Returns
    /// - `Ok(())` - Record written
    /// - `Err(StorageError::Serialize)` - Record could not be encoded
    /// - `Err(StorageError::Write)` / `Err(StorageError::Unavailable)` - Storage refused the write
    pub fn save(&self, company: &CompanySummary) -> Result<(), StorageError> {
        let record = SelectionRecord::active(company);
        let json = serde_json::to_string(&record).map_err(|e| StorageError::Serialize {
            key: self.keys.auditor_selection.clone(),
            reason: e.to_string(),
        })?;

        self.store.set(&self.keys.auditor_selection, &json)
    }

    /// Removes the record and both legacy keys.
    pub fn clear(&self) {
        self.store.remove(&self.keys.auditor_selection);
        self.store.remove(&self.keys.legacy_target_company);
        self.store.remove(&self.keys.legacy_auditor_mode);
    }

    /// Reads the persisted selection, clearing anything that is not a complete,
    /// active selection.
    ///
    /// # Behavior
    /// - A record with the current version and `active == true` is restored
    /// - Any other record (unparsable, unknown version, inactive) is cleared
    /// - Without a record, a legacy pair is migrated only if the company payload
    ///   parses and the mode flag equals `"true"`; otherwise both keys are cleared
    pub fn load(&self) -> RestoreOutcome {
        if let Some(raw) = self.store.get(&self.keys.auditor_selection) {
            return match serde_json::from_str::<SelectionRecord>(&raw) {
                Ok(record) if record.version == SELECTION_RECORD_VERSION && record.active => {
                    RestoreOutcome::Restored(record.company())
                }
                Ok(record) if record.version != SELECTION_RECORD_VERSION => {
                    self.discard(format!(
                        "unsupported selection record version {}",
                        record.version
                    ))
                }
                Ok(_) => self.discard("selection record is not active".to_string()),
                Err(e) => self.discard(format!("unparsable selection record: {}", e)),
            };
        }

        self.load_legacy()
    }

    fn load_legacy(&self) -> RestoreOutcome {
        let company = self.store.get(&self.keys.legacy_target_company);
        let mode = self.store.get(&self.keys.legacy_auditor_mode);

        let (company, mode) = match (company, mode) {
            (None, None) => return RestoreOutcome::Empty,
            (Some(company), Some(mode)) => (company, mode),
            (Some(_), None) => {
                return self.discard("legacy auditor mode flag missing".to_string());
            }
            (None, Some(_)) => {
                return self.discard("legacy target company missing".to_string());
            }
        };

        if mode != LEGACY_MODE_ACTIVE {
            return self.discard(format!("legacy auditor mode flag is {:?}", mode));
        }

        let legacy = match serde_json::from_str::<LegacyTargetCompany>(&company) {
            Ok(legacy) => legacy,
            Err(e) => return self.discard(format!("unparsable legacy target company: {}", e)),
        };

        let company = CompanySummary {
            id: legacy.id,
            name: legacy.name,
            logo_url: legacy.logo_url,
        };

        match self.save(&company) {
            Ok(()) => {
                self.store.remove(&self.keys.legacy_target_company);
                self.store.remove(&self.keys.legacy_auditor_mode);
            }
            Err(e) => {
                // Legacy keys stay so the next load can retry the migration
                tracing::warn!("Failed to migrate legacy auditor selection: {}", e);
            }
        }

        RestoreOutcome::Migrated(company)
    }

    fn discard(&self, reason: String) -> RestoreOutcome {
        tracing::warn!("Clearing stored auditor selection: {}", reason);
        self.clear();

        RestoreOutcome::Cleared(reason)
    }
}
