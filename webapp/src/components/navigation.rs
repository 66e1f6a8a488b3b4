use dioxus::prelude::*;
use dioxus_router::prelude::*;

use bucketlist_common::{
    content::{ACCOUNT, CART, DESKTOP_LINKS, HOME, Icon, MOBILE_LINKS, NavLink},
    menu::MenuState,
};

use crate::{Route, common::use_site, components::icons::Glyph};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    link: NavLink,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let link = props.link;

    // unbuilt pages like /shop share a path with a link but must not light it up
    let current_path: Route = use_route();
    let active = !matches!(current_path, Route::NotFound { .. }) && current_path.to_string() == link.path;

    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: link.path,
            "{link.label}"
        }
    }
}

// the badge is deliberately left empty; there is no cart to count
#[component]
fn CartLink() -> Element {
    rsx! {
        Link { class: "cart-link", to: CART.path,
            Glyph { icon: Icon::ShoppingBag, size: 22 }
            span { class: "sr-only", "{CART.label}" }
            span { class: "cart-badge" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobilePanelProps {
    menu: Signal<MenuState>,
}

#[component]
fn MobilePanel(props: MobilePanelProps) -> Element {
    let mut menu = props.menu;

    rsx! {
        div { class: "mobile-panel",
            nav { class: "mobile-links",
                for link in MOBILE_LINKS.iter().copied() {
                    Link {
                        key: "{link.path}",
                        class: "mobile-link",
                        to: link.path,
                        onclick: move |_| {
                            menu.write().follow(&link);
                        },
                        "{link.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let site = use_site();
    let mut menu = use_signal(MenuState::default);

    let open = menu().is_open();

    rsx! {
        header { class: "site-header",
            nav { class: "nav-container",
                Link { class: "brand", to: HOME.path,
                    img {
                        class: "brand-mark",
                        src: site.asset(&site.config.logo),
                        alt: "{site.config.brand} Logo",
                        width: "50",
                        height: "50",
                    }
                    span { class: "brand-name", "{site.config.short_brand}" }
                }

                div { class: "nav-links",
                    for link in DESKTOP_LINKS.iter().copied() {
                        NavBarButton { key: "{link.path}", link }
                    }
                    CartLink {}
                    Link { class: "btn btn-primary btn-sm", to: ACCOUNT.path, "Sign in" }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    aria_label: "Toggle navigation menu",
                    aria_expanded: "{open}",
                    onclick: move |_| menu.write().toggle(),
                    Glyph { icon: menu().toggle_icon(), size: 28 }
                }
            }

            if open {
                MobilePanel { menu }
            }
        }
    }
}
