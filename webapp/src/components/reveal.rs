use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use js_sys::Array;
use tracing::error;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Entrance {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    Fade,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Rise => "rise",
            Entrance::FromLeft => "from-left",
            Entrance::FromRight => "from-right",
            Entrance::Fade => "fade",
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// keeps the js callback alive for as long as the observer might call it
//
// dropping the watcher disconnects the observer, so unmounting a section that never
// scrolled into view does not leave anything behind
struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealWatcher {
    fn observe(target: &web_sys::Element, mut on_visible: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());

            // once only; later scroll-outs and scroll-ins are ignored
            if intersecting {
                on_visible();
                observer.disconnect();
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| anyhow::Error::msg(format!("failed to create observer: {err:?}")))?;
        observer.observe(target);

        Ok(RevealWatcher {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Plays an entrance transition the first time its contents scroll into view.
///
/// If the browser cannot observe the element the contents are simply shown.
#[component]
pub fn Reveal(
    #[props(default)] entrance: Entrance,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut shown = use_signal(|| false);
    let watcher = use_hook(|| Rc::new(RefCell::new(None::<RevealWatcher>)));

    let visible = if shown() { "visible" } else { "" };
    let classes = format!("reveal {} {visible} {class}", entrance.class());

    rsx! {
        div {
            class: "{classes}",
            onmounted: move |evt: MountedEvent| {
                if shown() {
                    return;
                }

                let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
                    shown.set(true);
                    return;
                };

                match RevealWatcher::observe(&element, move || shown.set(true)) {
                    Ok(observer) => *watcher.borrow_mut() = Some(observer),
                    Err(err) => {
                        error!("{err}");
                        shown.set(true);
                    }
                }
            },
            {children}
        }
    }
}
