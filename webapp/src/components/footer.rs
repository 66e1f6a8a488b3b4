use dioxus::prelude::*;

use bucketlist_common::clock::{SiteClock, copyright_line};

use crate::{common::use_site, components::forms::NewsletterForm};

#[component]
pub fn Footer(#[props(default)] clock: SiteClock) -> Element {
    let site = use_site();

    // computed in the render body on purpose: no memo, so a re-render always sees the current year
    let copyright = copyright_line(&clock, &site.config.brand, &site.config.motto);

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                p { "Subscribe for updates & exclusive offers:" }
                NewsletterForm {}
                p { "{copyright}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_year_from_clock() {
        let html = dioxus_ssr::render_element(rsx! { Footer { clock: SiteClock::Fixed(2030) } });

        assert!(html.contains("© 2030 Buck-et List Brands · Crafted for the Wild"));
    }

    #[test]
    fn year_advances_with_clock() {
        static CLOCK: GlobalSignal<SiteClock> = Signal::global(|| SiteClock::Fixed(2030));

        fn app() -> Element {
            rsx! { Footer { clock: CLOCK() } }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("© 2030 Buck-et List Brands"));

        dom.in_runtime(|| *CLOCK.write() = SiteClock::Fixed(2031));
        dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("© 2031 Buck-et List Brands"));
        assert!(!html.contains("2030"));
    }

    #[test]
    fn contains_newsletter_signup() {
        let html = dioxus_ssr::render_element(rsx! { Footer {} });

        assert!(html.contains("Subscribe for updates"));
        assert!(html.contains("newsletter-form"));
    }
}
