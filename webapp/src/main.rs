#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

use bucketlist_common::{
    config::{BuildProfile, Site, read_config},
    theme,
};

mod common;

mod components;
use components::shell::PageShell;

mod home;
use home::Home;

mod about;
use about::About;

mod contact;
use contact::Contact;

mod not_found;
use not_found::NotFound;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    dioxus_logger::init(level).expect("failed to init logger");
    launch(App);
}

// only home, about and contact have pages; shop, cart, account and /product/:slug are
// linked from the shell and fall through to NotFound until they are built
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(PageShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let site = use_context_provider(|| {
        let site = Site::new(read_config(), BuildProfile::current());
        info!(base_path = %site.base_path(), profile = ?site.profile, "starting storefront");
        site
    });

    rsx! {
        document::Link { rel: "icon", href: site.asset(&site.config.icon) }
        document::Meta { name: "description", content: "{site.config.description}" }
        style { "{theme::css_variables()}" }
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
