use dioxus::prelude::*;

use crate::client::{
    components::{AuditorBanner, Navbar, Toast},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(
        Navbar {}
        AuditorBanner {}
        Outlet::<Route> {}
        Toast {}
    )
}
