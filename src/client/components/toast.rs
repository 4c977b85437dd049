use dioxus::prelude::*;

use crate::client::store::notice::{NoticeKind, NoticeState};

#[component]
pub fn Toast() -> Element {
    let mut notice = use_context::<NoticeState>();

    let Some(current) = notice.0.read().clone() else {
        return rsx!();
    };

    let alert = match current.kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Error => "alert-error",
    };

    rsx!(
        div { class: "toast toast-end",
            div { class: "alert {alert}",
                span { "{current.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| notice.dismiss(),
                    "✕"
                }
            }
        }
    )
}
