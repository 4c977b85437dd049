//! Whose data the signed-in identity is looking at.
//!
//! The effective company selection is a two state machine, `Unset` and
//! `Set(company)`. `enter` moves to `Set` (switching directly between
//! companies is allowed), `exit` and `sign_out` move to `Unset`, and `restore`
//! promotes a cold start to `Set` when durable storage holds a valid prior
//! selection. Only auditors can leave `Unset`; everyone else always sees their
//! home company.

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    audit::route_context::{route_context_for, RouteContext},
    backend::AuditBackend,
    error::SessionError,
    model::{assignment::AuditAssignment, company::CompanySummary, identity::Identity},
    storage::{
        selection::{RestoreOutcome, SelectionStorage},
        KeyValueStore,
    },
};

pub struct AuditorSession<S> {
    identity: Option<Identity>,
    selection: Option<CompanySummary>,
    assignments: Vec<AuditAssignment>,
    storage: SelectionStorage<S>,
}

impl<S: KeyValueStore> AuditorSession<S> {
    /// Creates a session in the `Unset` state, call [`Self::restore`] before
    /// rendering views that depend on the effective company.
    pub fn new(identity: Option<Identity>, storage: SelectionStorage<S>) -> Self {
        Self {
            identity,
            selection: None,
            assignments: Vec::new(),
            storage,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_auditor(&self) -> bool {
        self.identity.as_ref().is_some_and(Identity::is_auditor)
    }

    /// The company an auditor is viewing as, if any
    pub fn selection(&self) -> Option<&CompanySummary> {
        self.selection.as_ref()
    }

    /// True while an auditor is viewing a client company
    pub fn is_auditor_mode(&self) -> bool {
        self.is_auditor() && self.selection.is_some()
    }

    /// Company whose data is in scope.
    ///
    /// # Returns
    /// - The selected company for an auditor in auditor mode
    /// - The identity's home company otherwise (always, for non-auditors)
    /// - `None` when signed out or when the identity has no home company
    pub fn effective_company_id(&self) -> Option<&str> {
        let identity = self.identity.as_ref()?;

        if identity.is_auditor() {
            if let Some(selection) = &self.selection {
                return Some(selection.id.as_str());
            }
        }

        identity.home_company_id.as_deref()
    }

    /// Replaces the signed-in identity, dropping auditor state that doesn't
    /// belong to the new identity.
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        let same_user = match (&self.identity, &identity) {
            (Some(current), Some(next)) => current.id == next.id,
            _ => false,
        };

        if !same_user {
            self.assignments.clear();
            self.selection = None;
        }

        self.identity = identity;

        if !self.is_auditor() {
            self.selection = None;
        }
    }

    /// Reinstates a persisted selection, performed once at startup.
    ///
    /// Partial or corrupt stored state is cleared whoever is signed in. A
    /// valid selection is only reinstated for auditors; for any other identity
    /// (or none) the session stays `Unset`, the outcome is `Empty` and the
    /// stored record is kept for the auditor it belongs to.
    pub fn restore(&mut self) -> RestoreOutcome {
        let outcome = self.storage.load();

        if !self.is_auditor() {
            self.selection = None;
            return match outcome {
                RestoreOutcome::Cleared(reason) => RestoreOutcome::Cleared(reason),
                _ => RestoreOutcome::Empty,
            };
        }

        self.selection = outcome.selection().cloned();

        if let Some(company) = &self.selection {
            tracing::info!("Restored auditor view of company {}", company.id);
        }

        outcome
    }

    /// Selects `company` as the effective company and persists the selection.
    ///
    /// A failed storage write is logged and does not undo the selection, the
    /// session simply won't survive a reload.
    ///
    /// # Returns
    /// - `Ok(())` - Selection set
    /// - `Err(SessionError::SignedOut)` - No identity is signed in
    /// - `Err(SessionError::NotAuditor)` - The identity is not an auditor
    pub fn enter(&mut self, company: CompanySummary) -> Result<(), SessionError> {
        let identity = self.identity.as_ref().ok_or(SessionError::SignedOut)?;
        if !identity.is_auditor() {
            return Err(SessionError::NotAuditor(identity.id.clone()));
        }

        if let Err(e) = self.storage.save(&company) {
            tracing::warn!("Failed to persist auditor selection: {}", e);
        }

        tracing::info!("Auditor {} entered company {}", identity.id, company.id);
        self.selection = Some(company);

        Ok(())
    }

    /// Clears the selection and its stored record, reverting to the home company.
    pub fn exit(&mut self) {
        if let Some(company) = self.selection.take() {
            tracing::info!("Left auditor view of company {}", company.id);
        }

        self.storage.clear();
    }

    /// Drops the identity along with any auditor selection.
    pub fn sign_out(&mut self) {
        self.exit();
        self.assignments.clear();
        self.identity = None;
    }

    /// Cached active assignments from the last [`Self::list_assignments`]
    pub fn assignments(&self) -> &[AuditAssignment] {
        &self.assignments
    }

    pub fn set_assignments(&mut self, assignments: Vec<AuditAssignment>) {
        self.assignments = assignments;
    }

    /// Fetches and caches the active assignments of the signed-in auditor.
    ///
    /// Never fails, see [`fetch_active_assignments`].
    pub async fn list_assignments<B: AuditBackend>(
        &mut self,
        backend: &B,
        today: NaiveDate,
    ) -> &[AuditAssignment] {
        self.assignments = fetch_active_assignments(backend, self.identity.as_ref(), today).await;
        &self.assignments
    }

    /// First cached assignment for `company_id`.
    ///
    /// `None` means recording findings against that company is unavailable.
    pub fn current_assignment_for(&self, company_id: &str) -> Option<&AuditAssignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.company_id == company_id)
    }

    /// Assignment backing the company currently viewed in auditor mode
    pub fn current_assignment(&self) -> Option<&AuditAssignment> {
        if !self.is_auditor_mode() {
            return None;
        }

        self.current_assignment_for(self.effective_company_id()?)
    }

    /// Clause context for the page at `path`, only while in auditor mode
    pub fn current_route_context(&self, path: &str) -> Option<&'static RouteContext> {
        if !self.is_auditor_mode() {
            return None;
        }

        route_context_for(path)
    }
}

/// Active assignments of `identity` for `today`.
///
/// Signed-out and non-auditor identities get an empty list without a backend
/// call. A backend failure is logged and degrades to an empty list so it never
/// reaches the render path.
pub async fn fetch_active_assignments<B: AuditBackend>(
    backend: &B,
    identity: Option<&Identity>,
    today: NaiveDate,
) -> Vec<AuditAssignment> {
    let Some(identity) = identity.filter(|identity| identity.is_auditor()) else {
        return Vec::new();
    };

    match backend.active_assignments(&identity.id, today).await {
        Ok(assignments) => assignments,
        Err(e) => {
            tracing::error!(
                "Failed to fetch audit assignments for auditor {}: {}",
                identity.id,
                e
            );
            Vec::new()
        }
    }
}
