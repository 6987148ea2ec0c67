//! Browser adapter.
//!
//! Queries the document once, turns DOM events into controller messages and
//! applies the resulting effects. Call `mount()` once the document has been
//! parsed; keep the returned handle for as long as the behaviors should run.

mod capabilities;
mod console;
mod dom;
mod listeners;
mod runtime;

pub use console::MakeConsoleWriter;

use crate::config::{ConfigFormat, load_config};
use crate::logging::{ReloadHandle, init_tracing, set_log_level};
use crate::page::PageController;
use anyhow::{Context, Result};
use runtime::PageRuntime;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen::prelude::*;

thread_local! {
    static LOG_HANDLE: RefCell<Option<ReloadHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    let handle = init_tracing();
    LOG_HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
}

/// Keeps the page behaviors attached. Dropping it or calling `unmount`
/// removes every listener, observer and timer.
#[wasm_bindgen]
pub struct PageHandle {
    runtime: Option<Rc<PageRuntime>>,
}

#[wasm_bindgen]
impl PageHandle {
    pub fn unmount(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.detach();
            info!("Page behaviors detached");
        }
    }

    /// Keep the behaviors attached for the lifetime of the page, independent
    /// of this handle. Consumes the handle; the behaviors can no longer be
    /// unmounted.
    pub fn leak(mut self) {
        if let Some(runtime) = self.runtime.take() {
            std::mem::forget(runtime);
            info!("Page behaviors pinned for the page lifetime");
        }
    }
}

/// Attach every page behavior. `config_source` is a TOML or JSON document;
/// without it an inline `<script id="folio-config">` block is used, if any.
///
/// The behaviors live exactly as long as the returned handle. A handle that
/// JavaScript drops is freed by the garbage collector when wasm-bindgen
/// finalization is enabled, which detaches everything at an arbitrary
/// moment. Store the handle, or call `leak()` on it to keep the behaviors
/// for the whole page lifetime.
#[wasm_bindgen]
pub fn mount(config_source: Option<String>) -> Result<PageHandle, JsValue> {
    match mount_page(config_source) {
        Ok(runtime) => Ok(PageHandle {
            runtime: Some(runtime),
        }),
        Err(err) => {
            error!("Failed to attach page behaviors: {err:#}");
            Err(JsValue::from_str(&format!("{err:#}")))
        }
    }
}

fn mount_page(config_source: Option<String>) -> Result<Rc<PageRuntime>> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;

    let source = config_source
        .map(|text| {
            let format = ConfigFormat::sniff(&text);
            (text, format)
        })
        .or_else(|| dom::embedded_config(&document));
    let config = load_config(
        source
            .as_ref()
            .map(|(text, format)| (text.as_str(), *format)),
    );
    LOG_HANDLE.with(|slot| {
        if let Some(handle) = slot.borrow().as_ref() {
            set_log_level(handle, config.log_level);
        }
    });

    let capabilities = capabilities::detect(&window, &document);
    let nodes = dom::PageNodes::query(&document, &config);
    let inventory = nodes.inventory();
    let (controller, effects) = PageController::bootstrap(config, inventory, capabilities);

    let runtime = PageRuntime::new(window, document, nodes, controller);
    runtime.apply_all(effects, None);
    listeners::install(&runtime);
    runtime.dispatch(runtime.measure(), None);
    Ok(runtime)
}
