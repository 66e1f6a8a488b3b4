use dioxus::prelude::*;
use dioxus_router::prelude::*;

use bucketlist_common::content::{ABOUT, SHOP};

use crate::{
    common::{hero_background, use_site},
    components::{
        cards::FeatureGrid,
        reveal::{Entrance, Reveal},
    },
};

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let title = site.page_title(None);

    rsx! {
        document::Title { "{title}" }

        div { class: "page",
            // Hero section
            section {
                class: "hero hero-tall",
                style: hero_background(&site, "deer-bg.jpg"),
                div { class: "hero-content enter",
                    img {
                        class: "hero-logo",
                        src: site.asset(&site.config.logo),
                        alt: "{site.config.brand} Logo",
                        width: "200",
                        height: "200",
                    }
                    h1 { class: "hero-title", "{site.config.brand}" }
                    p { class: "hero-subtitle", "{site.config.tagline}" }
                    div { class: "hero-actions",
                        Link { class: "btn btn-primary btn-lg", to: SHOP.path, "Shop Gear" }
                        Link { class: "btn btn-outline btn-lg", to: ABOUT.path, "Learn More" }
                    }
                }
            }

            // Featured gear
            section { class: "section section-moss",
                Reveal { class: "container",
                    h2 { class: "section-title centered", "Featured Gear" }
                    FeatureGrid {}
                    div { class: "view-all",
                        a { href: site.href(SHOP.path), "View All Gear →" }
                    }
                }
            }

            // Mission
            section { class: "section section-forest-light mission",
                Reveal { entrance: Entrance::Fade,
                    h2 { class: "section-title", "Why {site.config.short_brand}?" }
                    p {
                        "We combine precision engineering, rugged materials, and the spirit of the hunt "
                        "to craft apparel that endures the toughest conditions. "
                        "From sunrise stalks to long-haul treks, every thread is tested by nature itself."
                    }
                }
            }
        }
    }
}
