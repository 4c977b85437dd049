use dioxus::prelude::*;

use crate::client::store::auditor::AuditorContext;

/// Page body below the fixed navbar, and below the auditor banner while it is shown.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let auditor = use_context::<AuditorContext>();

    let class: &str = class.unwrap_or_default();
    let offset = if auditor.is_auditor_mode() {
        "pt-[112px]"
    } else {
        "pt-[64px]"
    };

    rsx!(
        div {
            class: "min-h-screen {offset} p-4 {class}",
            {children}
        }
    )
}
