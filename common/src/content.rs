// static storefront content
//
// everything the pages display lives here as &'static tables, so components stay plain
// markup and the data can be checked without a renderer

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Menu,
    Close,
    ShoppingBag,
    Mail,
    Phone,
    MapPin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        NavLink { label, path }
    }
}

pub const HOME: NavLink = NavLink::new("Home", "/");
pub const SHOP: NavLink = NavLink::new("Shop", "/shop");
pub const ABOUT: NavLink = NavLink::new("About", "/about");
pub const CONTACT: NavLink = NavLink::new("Contact", "/contact");
pub const ACCOUNT: NavLink = NavLink::new("Account", "/account");
pub const CART: NavLink = NavLink::new("Cart", "/cart");

pub const DESKTOP_LINKS: &[NavLink] = &[HOME, SHOP, ABOUT, CONTACT];

// the collapsed menu has no room for the sign-in button, so it gets an extra entry
pub const MOBILE_LINKS: &[NavLink] = &[HOME, SHOP, ABOUT, CONTACT, ACCOUNT];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub name: &'static str,
    pub image: &'static str,
    pub path: &'static str,
}

pub const FEATURE_BLURB: &str = "Durable, weather-ready performance gear built for hunters.";

// the image names do not line up with the labels; that is how the photos were shot
pub const FEATURED_GEAR: &[FeatureCard] = &[
    FeatureCard {
        name: "Hoodies",
        image: "images/jacket.jpg",
        path: "/product/stealth-jacket",
    },
    FeatureCard {
        name: "Shirts",
        image: "images/cap.jpg",
        path: "/product/trail-cap",
    },
    FeatureCard {
        name: "Hats",
        image: "images/hoodie.jpg",
        path: "/product/ranger-hoodie",
    },
];

impl FeatureCard {
    pub fn alt_text(&self) -> String {
        format!("{} – premium hunting apparel", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CORE_VALUES: &[ValueCard] = &[
    ValueCard {
        title: "Rugged Performance",
        description: "Built to withstand the harshest terrains and toughest hunts.",
    },
    ValueCard {
        title: "Precision Engineering",
        description: "Every stitch, zipper, and seam designed with purpose.",
    },
    ValueCard {
        title: "Connection to Nature",
        description: "Inspired by the wild, made to preserve and respect it.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Email,
    Phone,
    Address,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub value: &'static str,
    pub icon: Icon,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ChannelKind::Email,
        value: "support@bucketlistbrands.com",
        icon: Icon::Mail,
    },
    ContactChannel {
        kind: ChannelKind::Phone,
        value: "+1 (555) 987-4321",
        icon: Icon::Phone,
    },
    ContactChannel {
        kind: ChannelKind::Address,
        value: "Outfitter HQ, Bozeman, MT 59715",
        icon: Icon::MapPin,
    },
];

pub const BUSINESS_HOURS: &str = "Business Hours: Mon–Fri, 9am–5pm (MST)";

impl ContactChannel {
    /// Link target for channels the browser knows how to open.
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ChannelKind::Email => Some(format!("mailto:{}", self.value)),
            ChannelKind::Phone => {
                let digits: String = self
                    .value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                Some(format!("tel:{digits}"))
            }
            ChannelKind::Address => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn mobile_links_extend_desktop_links_by_account() {
        let desktop: HashSet<_> = DESKTOP_LINKS.iter().collect();
        let mobile: HashSet<_> = MOBILE_LINKS.iter().collect();

        assert!(desktop.is_subset(&mobile));

        let extra: Vec<_> = mobile.difference(&desktop).collect();
        assert_eq!(extra, vec![&&ACCOUNT]);
        assert_eq!(ACCOUNT.label, "Account");
    }

    #[test]
    fn links_share_desktop_order() {
        assert_eq!(&MOBILE_LINKS[..DESKTOP_LINKS.len()], DESKTOP_LINKS);
    }

    #[test]
    fn featured_gear() {
        let names: Vec<_> = FEATURED_GEAR.iter().map(|card| card.name).collect();
        let paths: Vec<_> = FEATURED_GEAR.iter().map(|card| card.path).collect();

        assert_eq!(names, ["Hoodies", "Shirts", "Hats"]);
        assert_eq!(
            paths,
            [
                "/product/stealth-jacket",
                "/product/trail-cap",
                "/product/ranger-hoodie"
            ]
        );
        assert_eq!(
            FEATURED_GEAR[0].alt_text(),
            "Hoodies – premium hunting apparel"
        );
    }

    #[test]
    fn core_values() {
        let titles: Vec<_> = CORE_VALUES.iter().map(|card| card.title).collect();

        assert_eq!(
            titles,
            [
                "Rugged Performance",
                "Precision Engineering",
                "Connection to Nature"
            ]
        );
    }

    #[test]
    fn channel_hrefs() {
        let hrefs: Vec<_> = CONTACT_CHANNELS.iter().map(ContactChannel::href).collect();

        assert_eq!(
            hrefs,
            [
                Some(String::from("mailto:support@bucketlistbrands.com")),
                Some(String::from("tel:+15559874321")),
                None
            ]
        );
    }
}
