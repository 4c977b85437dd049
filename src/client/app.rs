use chrono::Local;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use qualitrack::{
    audit::{fetch_active_assignments, AuditorSession},
    backend::{AuditBackend, RestBackend},
    config::Config,
    model::identity::AuthSession,
    storage::{auth::read_auth_session, selection::SelectionStorage, LocalStorage, StorageKeys},
};

use crate::client::{
    router::Route,
    store::{
        app::AppContext,
        auditor::AuditorContext,
        notice::NoticeState,
        user::UserState,
    },
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = match Config::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return rsx!(
                div { class: "min-h-screen flex items-center justify-center",
                    p { "Qualitrack is not configured: {e}" }
                }
            );
        }
    };

    rsx!(
        document::Stylesheet { href: TAILWIND_CSS }
        Provider { config }
    )
}

/// Installs the application contexts, then resolves the identity and restores
/// the auditor selection before any page depending on them renders.
#[component]
fn Provider(config: Config) -> Element {
    let keys = StorageKeys::new(&config.storage_prefix);
    let auth: Option<AuthSession> = read_auth_session(&LocalStorage, &keys.auth_session);

    let app = use_context_provider(|| {
        let mut backend = RestBackend::new(&config);
        if let Some(auth) = &auth {
            backend = backend.with_access_token(auth.access_token.clone());
        }

        AppContext {
            keys: keys.clone(),
            backend,
        }
    });
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));
    let mut auditor = use_context_provider(|| {
        AuditorContext::new(Signal::new(AuditorSession::new(
            None,
            SelectionStorage::new(LocalStorage, app.keys.clone()),
        )))
    });
    use_context_provider(|| NoticeState(Signal::new(None)));

    let user_id = auth.map(|auth| auth.user_id);
    let backend = app.backend.clone();
    use_hook(move || {
        spawn(async move {
            let identity = match &user_id {
                Some(user_id) => match backend.fetch_identity(user_id).await {
                    Ok(identity) => identity,
                    Err(e) => {
                        tracing::error!("Failed to fetch identity: {}", e);
                        None
                    }
                },
                None => None,
            };

            auditor.sign_in(identity.clone());

            let today = Local::now().date_naive();
            let assignments = fetch_active_assignments(&backend, identity.as_ref(), today).await;
            auditor.set_assignments(assignments);

            user_state.set(UserState {
                identity,
                fetched: true,
            });
        });
    });

    rsx!(Router::<Route> {})
}
