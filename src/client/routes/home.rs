use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::Route,
    store::{auditor::AuditorContext, user::UserState},
    APP_VERSION,
};

#[component]
fn StartLinks() -> Element {
    let auditor = use_context::<AuditorContext>();
    let user_state = use_context::<Signal<UserState>>();

    let state = user_state.read();
    if !state.fetched {
        return rsx!(span { class: "loading loading-spinner" });
    }
    if state.identity.is_none() {
        return rsx!(p { class: "opacity-70", "Sign in to the quality portal to continue." });
    }

    rsx!(
        ul { class: "flex gap-2",
            li {
                Link { to: Route::FindingsOverview {}, class: "btn btn-primary w-40", "Findings" }
            }
            if auditor.is_auditor() {
                li {
                    Link { to: Route::AuditorPortal {}, class: "btn btn-secondary w-40", "Auditor portal" }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Qualitrack" }
        Meta {
            name: "description",
            content: "ISO 9001 quality management with external audit support."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl", "Qualitrack" }
                    p { "v{APP_VERSION}" }
                }
                StartLinks {}
                p { class: "max-w-256 text-center opacity-80",
                    "External auditors review each company's quality records in place and leave findings on the entities they inspect."
                }
            }
        }
    )
}
