use dioxus::prelude::*;

use crate::client::{
    components::Layout,
    routes::{auditor::AuditorPortal, FindingsOverview, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]

    #[route("/")]
    Home {},

    #[route("/auditor")]
    AuditorPortal {},

    #[route("/achados")]
    FindingsOverview {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
