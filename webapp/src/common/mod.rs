pub mod style;

#[cfg(test)]
pub mod testing;

use dioxus::prelude::*;

use bucketlist_common::config::Site;

// App provides the resolved site settings as context; components rendered on their own
// (e.g. under ssr) fall back to the defaults for the current build profile
pub fn use_site() -> Site {
    try_use_context::<Site>().unwrap_or_default()
}

pub fn hero_background(site: &Site, image: &str) -> String {
    format!("background-image: url('{}');", site.asset(image))
}
