use super::dom::PageNodes;
use crate::error::{PageError, PageResult};
use crate::page::{Effect, Message, PageController, ScrollMode, Target};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, trace, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window};

use super::listeners::RevealObserver;

/// Live page state: the controller, the cached nodes, and every
/// subscription feeding it. Dropping the runtime detaches all of them.
pub(super) struct PageRuntime {
    controller: RefCell<PageController>,
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) nodes: PageNodes,
    menu_open_class: String,
    listeners: RefCell<Vec<EventListener>>,
    observer: RefCell<Option<RevealObserver>>,
    typing_timer: RefCell<Option<Timeout>>,
}

impl PageRuntime {
    pub(super) fn new(
        window: Window,
        document: Document,
        nodes: PageNodes,
        controller: PageController,
    ) -> Rc<Self> {
        let menu_open_class = controller.config().menu_open_class.clone();
        Rc::new(PageRuntime {
            controller: RefCell::new(controller),
            window,
            document,
            nodes,
            menu_open_class,
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            typing_timer: RefCell::new(None),
        })
    }

    pub(super) fn capabilities(&self) -> crate::page::Capabilities {
        self.controller.borrow().capabilities()
    }

    pub(super) fn fade_threshold_and_margin(&self) -> (f64, String) {
        let controller = self.controller.borrow();
        let config = controller.config();
        (config.fade_threshold, config.fade_root_margin())
    }

    pub(super) fn menu_is_open(&self) -> bool {
        self.nodes.menu_is_open(&self.menu_open_class)
    }

    pub(super) fn measure(&self) -> Message {
        Message::Scrolled(self.nodes.snapshot(&self.window))
    }

    pub(super) fn hold_listeners(&self, listeners: Vec<EventListener>) {
        self.listeners.borrow_mut().extend(listeners);
    }

    pub(super) fn hold_observer(&self, observer: RevealObserver) {
        *self.observer.borrow_mut() = Some(observer);
    }

    /// Drop every subscription. Pending timers are cancelled.
    pub(super) fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.observer.borrow_mut().take();
        self.typing_timer.borrow_mut().take();
    }

    /// Feed one message through the controller, then apply its effects.
    /// `event` is the DOM event being handled, if any.
    pub(super) fn dispatch(self: &Rc<Self>, message: Message, event: Option<&Event>) {
        let effects = match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.update(message),
            Err(_) => {
                warn!(?message, "Controller busy; dropping re-entrant message");
                return;
            }
        };
        self.apply_all(effects, event);
    }

    pub(super) fn apply_all(self: &Rc<Self>, effects: Vec<Effect>, event: Option<&Event>) {
        for effect in effects {
            if let Err(err) = self.apply(effect, event) {
                error!("{err}");
            }
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect, event: Option<&Event>) -> PageResult<()> {
        match effect {
            Effect::SetClass {
                target,
                class,
                enabled,
            } => {
                let Some(element) = self.element(target) else {
                    return Ok(());
                };
                element
                    .class_list()
                    .toggle_with_force(&class, enabled)
                    .map(|_| ())
                    .map_err(dom_error("classList.toggle"))
            }
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                let Some(element) = self.element(target) else {
                    return Ok(());
                };
                let Some(html) = element.dyn_ref::<HtmlElement>() else {
                    trace!(?target, "Target has no inline style");
                    return Ok(());
                };
                html.style()
                    .set_property(property, &value)
                    .map_err(dom_error("style.setProperty"))
            }
            Effect::SetText { target, text } => {
                if let Some(element) = self.element(target) {
                    element.set_text_content(Some(&text));
                }
                Ok(())
            }
            Effect::InjectStyleRule(rule) => self.inject_style_rule(&rule),
            Effect::ScrollTo { top, mode } => {
                match mode {
                    ScrollMode::Smooth => {
                        let options = ScrollToOptions::new();
                        options.set_top(top);
                        options.set_behavior(ScrollBehavior::Smooth);
                        self.window.scroll_to_with_scroll_to_options(&options);
                    }
                    ScrollMode::Instant => self.window.scroll_to_with_x_and_y(0.0, top),
                }
                Ok(())
            }
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
                Ok(())
            }
            Effect::ScheduleTypingTick { delay_ms } => {
                let runtime = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.dispatch(Message::TypingTick, None);
                    }
                });
                *self.typing_timer.borrow_mut() = Some(timeout);
                Ok(())
            }
            Effect::ShowAlert(message) => self
                .window
                .alert_with_message(&message)
                .map_err(dom_error("alert")),
            Effect::ResetForm(index) => {
                if let Some(form) = self
                    .nodes
                    .forms
                    .get(index)
                    .and_then(|form| form.dyn_ref::<HtmlFormElement>())
                {
                    form.reset();
                }
                Ok(())
            }
        }
    }

    fn element(&self, target: Target) -> Option<&web_sys::Element> {
        let element = self.nodes.element(target);
        if element.is_none() {
            trace!(?target, "No element for effect target");
        }
        element
    }

    fn inject_style_rule(&self, rule: &str) -> PageResult<()> {
        let style = self
            .document
            .create_element("style")
            .map_err(dom_error("createElement"))?;
        style.set_text_content(Some(rule));
        let head = self.document.head().ok_or_else(|| PageError::MissingElement {
            selector: "head".to_string(),
        })?;
        head.append_child(&style)
            .map(|_| ())
            .map_err(dom_error("appendChild"))
    }
}

fn dom_error(operation: &'static str) -> impl Fn(JsValue) -> PageError {
    move |value| PageError::Dom {
        operation,
        detail: format!("{value:?}"),
    }
}
