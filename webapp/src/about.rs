use dioxus::prelude::*;

use bucketlist_common::content::SHOP;

use crate::{
    common::{hero_background, use_site},
    components::{
        cards::ValuesGrid,
        reveal::{Entrance, Reveal},
    },
};

#[component]
pub fn About() -> Element {
    let site = use_site();
    let title = site.page_title(Some("About"));

    rsx! {
        document::Title { "{title}" }

        div { class: "page",
            section { class: "hero", style: hero_background(&site, "deer-bg.jpg"),
                div { class: "hero-content enter",
                    h1 { class: "hero-title", "About {site.config.brand}" }
                    p { class: "hero-subtitle",
                        "Born in the backcountry. Built for those who live for the hunt."
                    }
                }
            }

            // Our story
            section { class: "section section-moss",
                div { class: "container split",
                    Reveal { entrance: Entrance::FromLeft,
                        h2 { class: "section-title", "Our Story" }
                        p { class: "lede",
                            "{site.config.brand} began with a simple mission: to create apparel that performs as hard as you do in the field. "
                            "What started as a small idea among passionate hunters evolved into a brand dedicated to durability, performance, and style."
                        }
                        p { class: "lede muted", style: "margin-top: var(--space-4);",
                            "Every piece we design is tested in real conditions, through mud, rain, and cold. "
                            "Whether it’s a stealth jacket for the early morning stalk or a rugged hoodie for campfire nights, we build it to last."
                        }
                    }
                    Reveal { entrance: Entrance::FromRight, class: "story-image",
                        img {
                            src: site.asset("images/hunters.jpg"),
                            alt: "Hunters wearing {site.config.short_brand} apparel",
                        }
                    }
                }
            }

            // Core values
            section { class: "section section-forest-light",
                div { class: "container",
                    h2 { class: "section-title centered", "Our Core Values" }
                    ValuesGrid {}
                }
            }

            // Call to action
            section { class: "section section-bark cta",
                Reveal { entrance: Entrance::Fade, class: "cta-inner",
                    h2 { class: "section-title", "Ready to Gear Up?" }
                    p { "Join the {site.config.short_brand} movement, crafted by hunters, for hunters." }
                    a { class: "btn btn-primary btn-wide", href: site.href(SHOP.path), "Shop Now" }
                }
            }
        }
    }
}
