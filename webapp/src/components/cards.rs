use dioxus::prelude::*;

use bucketlist_common::content::{
    CONTACT_CHANNELS, CORE_VALUES, ContactChannel, FEATURE_BLURB, FEATURED_GEAR, FeatureCard,
    ValueCard,
};

use crate::{common::use_site, components::icons::Glyph};

// product pages do not exist yet, so these are plain anchors rather than router links
#[component]
fn FeatureCardView(card: FeatureCard) -> Element {
    let site = use_site();

    rsx! {
        a { class: "feature-link", href: site.href(card.path),
            div { class: "card feature-card hover-lift",
                img {
                    class: "feature-image",
                    src: site.asset(card.image),
                    alt: card.alt_text(),
                    width: "400",
                    height: "400",
                }
                div { class: "feature-body",
                    h3 { class: "card-title", "{card.name}" }
                    p { "{FEATURE_BLURB}" }
                }
            }
        }
    }
}

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        div { class: "card-grid",
            for card in FEATURED_GEAR.iter().copied() {
                FeatureCardView { key: "{card.name}", card }
            }
        }
    }
}

#[component]
fn ValueCardView(card: ValueCard) -> Element {
    rsx! {
        div { class: "card value-card hover-grow",
            h3 { class: "card-title", "{card.title}" }
            p { "{card.description}" }
        }
    }
}

#[component]
pub fn ValuesGrid() -> Element {
    rsx! {
        div { class: "card-grid",
            for card in CORE_VALUES.iter().copied() {
                ValueCardView { key: "{card.title}", card }
            }
        }
    }
}

#[component]
fn ChannelItem(channel: ContactChannel) -> Element {
    rsx! {
        li { class: "channel",
            Glyph { icon: channel.icon, size: 20 }
            {
                match channel.href() {
                    Some(href) => rsx! { a { href, "{channel.value}" } },
                    None => rsx! { span { "{channel.value}" } },
                }
            }
        }
    }
}

#[component]
pub fn ChannelList() -> Element {
    rsx! {
        ul { class: "channel-list",
            for channel in CONTACT_CHANNELS.iter().copied() {
                ChannelItem { key: "{channel.value}", channel }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_grid_renders_three_linked_cards() {
        let html = dioxus_ssr::render_element(rsx! { FeatureGrid {} });

        assert_eq!(html.matches("class=\"card feature-card hover-lift\"").count(), 3);
        for (name, path) in [
            ("Hoodies", "/product/stealth-jacket"),
            ("Shirts", "/product/trail-cap"),
            ("Hats", "/product/ranger-hoodie"),
        ] {
            assert!(html.contains(&format!(">{name}</h3>")), "missing {name}");
            assert!(html.contains(&format!("{path}\"")), "missing {path}");
        }
    }

    #[test]
    fn values_grid_renders_three_titles() {
        let html = dioxus_ssr::render_element(rsx! { ValuesGrid {} });

        assert_eq!(html.matches("class=\"card value-card hover-grow\"").count(), 3);
        for title in [
            "Rugged Performance",
            "Precision Engineering",
            "Connection to Nature",
        ] {
            assert!(html.contains(&format!(">{title}</h3>")), "missing {title}");
        }
    }

    #[test]
    fn channels_link_where_possible() {
        let html = dioxus_ssr::render_element(rsx! { ChannelList {} });

        assert!(html.contains("href=\"mailto:support@bucketlistbrands.com\""));
        assert!(html.contains("href=\"tel:+15559874321\""));
        assert!(html.contains("<span>Outfitter HQ, Bozeman, MT 59715</span>"));
        assert_eq!(html.matches("<svg").count(), 3);
    }
}
