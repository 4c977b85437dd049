use dioxus::prelude::*;
use qualitrack::storage::{auth::clear_auth_session, LocalStorage};

use crate::client::{
    components::QualitrackTitleButton,
    router::Route,
    store::{app::AppContext, auditor::AuditorContext, user::UserState},
};

#[component]
pub fn Navbar() -> Element {
    let app = use_context::<AppContext>();
    let mut auditor = use_context::<AuditorContext>();
    let mut user_state = use_context::<Signal<UserState>>();

    let signed_in = user_state.read().identity.is_some();
    let is_auditor = auditor.is_auditor();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                QualitrackTitleButton {}
            }
            div {
                class: "navbar-end flex gap-2",
                if signed_in {
                    Link { to: Route::FindingsOverview {}, class: "btn btn-ghost", "Findings" }
                    if is_auditor {
                        Link { to: Route::AuditorPortal {}, class: "btn btn-ghost", "Auditor portal" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            auditor.sign_out();
                            clear_auth_session(&LocalStorage, &app.keys.auth_session);
                            user_state.set(UserState { identity: None, fetched: true });
                            navigator().push(Route::Home {});
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
