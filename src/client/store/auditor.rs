use dioxus::prelude::*;
use qualitrack::{
    audit::{AuditorSession, RouteContext},
    error::SessionError,
    model::{assignment::AuditAssignment, company::CompanySummary, identity::Identity},
    storage::{selection::RestoreOutcome, LocalStorage},
};

/// Handle to the application wide auditor session.
///
/// Components read through the accessors so they subscribe to the session
/// signal; all changes go through `enter`, `exit` and the identity setters.
#[derive(Clone, Copy)]
pub struct AuditorContext {
    session: Signal<AuditorSession<LocalStorage>>,
}

impl AuditorContext {
    pub fn new(session: Signal<AuditorSession<LocalStorage>>) -> Self {
        Self { session }
    }

    pub fn is_auditor(&self) -> bool {
        self.session.read().is_auditor()
    }

    pub fn is_auditor_mode(&self) -> bool {
        self.session.read().is_auditor_mode()
    }

    pub fn selection(&self) -> Option<CompanySummary> {
        self.session.read().selection().cloned()
    }

    pub fn effective_company_id(&self) -> Option<String> {
        self.session
            .read()
            .effective_company_id()
            .map(str::to_string)
    }

    pub fn assignments(&self) -> Vec<AuditAssignment> {
        self.session.read().assignments().to_vec()
    }

    pub fn current_assignment(&self) -> Option<AuditAssignment> {
        self.session.read().current_assignment().cloned()
    }

    pub fn current_route_context(&self, path: &str) -> Option<&'static RouteContext> {
        self.session.read().current_route_context(path)
    }

    /// Read access for the finding workflow, which validates drafts against the session
    pub fn with_session<R>(&self, f: impl FnOnce(&AuditorSession<LocalStorage>) -> R) -> R {
        f(&self.session.read())
    }

    /// Sets the identity and reinstates its persisted selection.
    pub fn sign_in(&mut self, identity: Option<Identity>) -> RestoreOutcome {
        let mut session = self.session.write();
        session.set_identity(identity);
        session.restore()
    }

    pub fn sign_out(&mut self) {
        self.session.write().sign_out();
    }

    pub fn enter(&mut self, company: CompanySummary) -> Result<(), SessionError> {
        self.session.write().enter(company)
    }

    pub fn exit(&mut self) {
        self.session.write().exit();
    }

    pub fn set_assignments(&mut self, assignments: Vec<AuditAssignment>) {
        self.session.write().set_assignments(assignments);
    }
}
