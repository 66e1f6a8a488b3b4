use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{footer::Footer, navigation::NavBar},
};

// layout for every route; main is padded so the fixed header never covers the page
#[component]
pub fn PageShell() -> Element {
    rsx! {
        NavBar {}
        main { class: "page-content", Outlet::<Route> {} }
        Footer {}
    }
}
