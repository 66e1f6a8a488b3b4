use dioxus::prelude::*;

use bucketlist_common::content::{BUSINESS_HOURS, SHOP};

use crate::{
    common::{hero_background, use_site},
    components::{
        cards::ChannelList,
        forms::ContactForm,
        reveal::{Entrance, Reveal},
    },
};

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let title = site.page_title(Some("Contact"));

    rsx! {
        document::Title { "{title}" }

        div { class: "page",
            section {
                class: "hero",
                style: hero_background(&site, "images/forest-bg.jpg"),
                div { class: "hero-content enter",
                    h1 { class: "hero-title", "Contact Us" }
                    p { class: "hero-subtitle",
                        "Have a question, a story to share, or feedback about your gear? "
                        "We’d love to hear from you."
                    }
                }
            }

            section { class: "section section-moss",
                div { class: "container split top",
                    Reveal { entrance: Entrance::FromLeft,
                        h2 { class: "section-title", "Get in Touch" }
                        p { class: "lede", style: "margin-bottom: var(--space-6);",
                            "Whether you’re looking for product support, collaboration opportunities, "
                            "or just want to share your hunting story, our team is always ready to connect."
                        }
                        ChannelList {}
                        p { class: "hours", "{BUSINESS_HOURS}" }
                    }
                    Reveal { entrance: Entrance::FromRight, ContactForm {} }
                }
            }

            section { class: "section section-bark cta",
                Reveal { entrance: Entrance::Fade, class: "cta-inner",
                    h2 { class: "section-title", "Prefer to Talk to Someone?" }
                    p {
                        "Give us a call, we’re real hunters, not robots. "
                        "Our team loves hearing your feedback and gear stories."
                    }
                    a { class: "btn btn-primary btn-wide", href: site.href(SHOP.path), "Visit the Shop" }
                }
            }
        }
    }
}
