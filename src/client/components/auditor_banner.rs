use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRightFromBracket, FaUserShield};
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    store::{auditor::AuditorContext, notice::NoticeState},
};

/// Strip under the navbar shown while an auditor is viewing a client company.
#[component]
pub fn AuditorBanner() -> Element {
    let mut auditor = use_context::<AuditorContext>();
    let mut notice = use_context::<NoticeState>();

    let Some(company) = auditor.selection().filter(|_| auditor.is_auditor_mode()) else {
        return rsx!();
    };

    rsx!(
        div {
            class: "fixed top-[64px] w-full z-10 bg-warning text-warning-content px-4 h-12 flex items-center justify-between",
            div { class: "flex items-center gap-2",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaUserShield
                }
                if let Some(logo_url) = &company.logo_url {
                    img { class: "w-6 h-6 rounded", src: "{logo_url}", alt: "{company.name}" }
                }
                p { "Auditing {company.name}" }
            }
            button {
                class: "btn btn-sm btn-outline flex gap-2",
                onclick: move |_| {
                    auditor.exit();
                    notice.success("Left auditor mode");
                    navigator().push(Route::AuditorPortal {});
                },
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaArrowRightFromBracket
                }
                "Exit"
            }
        }
    )
}
