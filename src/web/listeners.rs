use super::dom::{self, REVEAL_INDEX_ATTR};
use super::runtime::PageRuntime;
use crate::error::PageError;
use crate::page::{LinkChannel, Message};
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, EventTarget, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};

/// Intersection watcher for fade-in elements. Disconnects when dropped.
pub(super) struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Subscribe the runtime to every event source it reacts to.
pub(super) fn install(runtime: &Rc<PageRuntime>) {
    let mut listeners = Vec::new();
    let nodes = &runtime.nodes;

    listeners.push(listen(runtime, &runtime.window, "scroll", false, |runtime, _| {
        Some(runtime.measure())
    }));

    if let Some(button) = &nodes.scroll_top_button {
        listeners.push(listen(runtime, button, "click", false, |_, _| {
            Some(Message::ScrollTopClicked)
        }));
    }

    for anchor in &nodes.anchors {
        let href = anchor.get_attribute("href").unwrap_or_default();
        listeners.push(listen(runtime, anchor, "click", true, move |runtime, _| {
            let target_top = if href.trim() == "#" {
                None
            } else {
                dom::fragment_top(&runtime.document, &href)
            };
            Some(Message::AnchorActivated {
                href: href.clone(),
                target_top,
                menu_open: runtime.menu_is_open(),
            })
        }));
    }

    listeners.push(listen(runtime, &runtime.document, "click", false, |runtime, event| {
        let node = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        Some(Message::DocumentClicked {
            inside_menu: runtime.nodes.is_inside_menu(node.as_ref()),
            menu_open: runtime.menu_is_open(),
        })
    }));

    for (index, form) in nodes.forms.iter().enumerate() {
        listeners.push(listen(runtime, form, "submit", true, move |_, _| {
            Some(Message::FormSubmitted { index })
        }));
    }

    for (index, image) in nodes.images.iter().enumerate() {
        let src = image
            .dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::src)
            .or_else(|| image.get_attribute("src"))
            .unwrap_or_default();
        listeners.push(listen(runtime, image, "error", false, move |_, _| {
            Some(Message::ImageFailed {
                index,
                src: src.clone(),
            })
        }));
    }

    for (index, badge) in nodes.badges.iter().enumerate() {
        for (event_type, entered) in [("mouseenter", true), ("mouseleave", false)] {
            listeners.push(listen(runtime, badge, event_type, false, move |_, _| {
                Some(Message::BadgeHovered { index, entered })
            }));
        }
    }

    let channels = [
        (&nodes.email_links, LinkChannel::Email),
        (&nodes.whatsapp_links, LinkChannel::WhatsApp),
        (&nodes.social_links, LinkChannel::Social),
    ];
    for (links, channel) in channels {
        for link in links {
            let label = link.get_attribute("title");
            listeners.push(listen(runtime, link, "click", false, move |_, _| {
                Some(Message::LinkClicked {
                    channel,
                    label: label.clone(),
                })
            }));
        }
    }

    if runtime.document.ready_state() == "complete" {
        let load_time_ms = dom::load_time_ms(&runtime.window);
        runtime.dispatch(Message::Loaded { load_time_ms }, None);
    } else {
        listeners.push(listen(runtime, &runtime.window, "load", false, |runtime, _| {
            Some(Message::Loaded {
                load_time_ms: dom::load_time_ms(&runtime.window),
            })
        }));
    }

    debug!(count = listeners.len(), "Installed event listeners");
    runtime.hold_listeners(listeners);

    if runtime.capabilities().intersection_observer && !nodes.fade_ins.is_empty() {
        match observe_fade_ins(runtime) {
            Ok(observer) => runtime.hold_observer(observer),
            Err(err) => {
                error!("{err}");
                runtime.dispatch(Message::RevealUnavailable, None);
            }
        }
    }
}

/// Wrap an event source so each event becomes a controller message. The
/// closure holds only a weak reference to the runtime.
fn listen<F>(
    runtime: &Rc<PageRuntime>,
    target: &EventTarget,
    event_type: &'static str,
    cancelable: bool,
    to_message: F,
) -> EventListener
where
    F: Fn(&Rc<PageRuntime>, &Event) -> Option<Message> + 'static,
{
    let weak = Rc::downgrade(runtime);
    let options = if cancelable {
        EventListenerOptions::enable_prevent_default()
    } else {
        EventListenerOptions::default()
    };
    EventListener::new_with_options(target, event_type, options, move |event| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        if let Some(message) = to_message(&runtime, event) {
            runtime.dispatch(message, Some(event));
        }
    })
}

fn observe_fade_ins(runtime: &Rc<PageRuntime>) -> Result<RevealObserver, PageError> {
    let weak = Rc::downgrade(runtime);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(index) = reveal_index(&entry.target()) else {
                    warn!("Intersection entry without a reveal index");
                    continue;
                };
                runtime.dispatch(
                    Message::Intersected {
                        index,
                        is_intersecting: entry.is_intersecting(),
                    },
                    None,
                );
            }
        },
    );

    let (threshold, root_margin) = runtime.fade_threshold_and_margin();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());
    options.set_root_margin(&root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| PageError::Dom {
                operation: "new IntersectionObserver",
                detail: format!("{err:?}"),
            })?;
    for element in &runtime.nodes.fade_ins {
        observer.observe(element);
    }
    debug!(
        count = runtime.nodes.fade_ins.len(),
        threshold,
        root_margin = %root_margin,
        "Watching fade-in elements"
    );

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn reveal_index(element: &Element) -> Option<usize> {
    element
        .get_attribute(REVEAL_INDEX_ATTR)
        .and_then(|value| value.parse().ok())
}
