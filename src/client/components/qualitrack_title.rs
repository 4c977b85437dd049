use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaClipboardCheck;
use dioxus_free_icons::Icon;

use crate::client::{router::Route, APP_VERSION};

/// Product name linking back to the start page.
#[component]
pub fn QualitrackTitleButton() -> Element {
    rsx!(
        Link { to: Route::Home {}, class: "flex items-center gap-2",
            Icon {
                width: 20,
                height: 20,
                icon: FaClipboardCheck
            }
            span { class: "text-xl", "Qualitrack" }
            span { class: "badge badge-ghost badge-sm", "v{APP_VERSION}" }
        }
    )
}
