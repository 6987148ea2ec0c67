use crate::page::Capabilities;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

pub(super) fn detect(window: &Window, document: &Document) -> Capabilities {
    let intersection_observer =
        js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);

    let smooth_scroll = document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .map(|root| {
            js_sys::Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior"))
                .unwrap_or(false)
        })
        .unwrap_or(false);

    Capabilities {
        intersection_observer,
        smooth_scroll,
    }
}
