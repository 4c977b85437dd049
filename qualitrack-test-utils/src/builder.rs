//! Declarative test setup.
//!
//! Fixtures are queued on the builder and loaded into the fake backend and
//! storage by `build()`.

use qualitrack::{
    model::{
        assignment::AuditAssignment, company::CompanySummary, finding::Finding,
        identity::Identity,
    },
    storage::KeyValueStore,
};

use crate::{context::TestContext, error::TestError};

#[derive(Default)]
pub struct TestBuilder {
    identities: Vec<Identity>,
    assignments: Vec<AuditAssignment>,
    findings: Vec<Finding>,
    stored_selection: Option<CompanySummary>,
    raw_entries: Vec<(String, String)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile row returned by `fetch_identity`
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identities.push(identity);
        self
    }

    pub fn with_assignment(mut self, assignment: AuditAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Insert a finding row, rows are fetched in the order they were added
    pub fn with_finding(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }

    /// Persist `company` as the auditor selection before the test starts
    pub fn with_stored_selection(mut self, company: CompanySummary) -> Self {
        self.stored_selection = Some(company);
        self
    }

    /// Write a raw storage entry, for corrupt or legacy state. The key is
    /// appended to the test storage prefix, e.g. `"auditor_mode"`.
    pub fn with_storage_entry(mut self, key_suffix: &str, value: &str) -> Self {
        self.raw_entries
            .push((key_suffix.to_string(), value.to_string()));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Backend and storage loaded with the queued fixtures
    /// - `Err(TestError::InvalidFixture)` - A finding references an assignment that wasn't added
    /// - `Err(TestError::StorageError)` - Writing a storage fixture failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new();

        for finding in &self.findings {
            if !self
                .assignments
                .iter()
                .any(|assignment| assignment.id == finding.assignment_id)
            {
                return Err(TestError::InvalidFixture(format!(
                    "finding {} references unknown assignment {}",
                    finding.id, finding.assignment_id
                )));
            }
        }

        for identity in self.identities {
            test.backend.insert_identity(identity);
        }
        for assignment in self.assignments {
            test.backend.insert_assignment(assignment);
        }
        for finding in self.findings {
            test.backend.insert_finding_row(finding);
        }

        if let Some(company) = &self.stored_selection {
            test.selection_storage().save(company)?;
        }
        for (suffix, value) in &self.raw_entries {
            test.store
                .set(&format!("{}_{}", crate::constant::TEST_STORAGE_PREFIX, suffix), value)?;
        }

        Ok(test)
    }
}
