use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use bucketlist_common::content::HOME;

use crate::common::use_site;

// shop, cart, account and product pages are linked from the shell but not built yet;
// they land here along with any other unknown path
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let site = use_site();
    let title = site.page_title(Some("Not Found"));
    let path = format!("/{}", segments.join("/"));

    debug!(%path, "no page for route");

    rsx! {
        document::Title { "{title}" }

        div { class: "page lost",
            h1 { class: "hero-title", "Trail Not Found" }
            p { class: "hero-subtitle", "Nothing has been built at " code { "{path}" } " yet." }
            div { class: "hero-actions",
                Link { class: "btn btn-primary btn-lg", to: HOME.path, "Back to Base Camp" }
            }
        }
    }
}
