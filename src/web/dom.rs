//! Node caches and geometry reads.
//!
//! Every node list is queried once at mount. Geometry is re-read from the
//! cached nodes on each event.

use crate::config::{ConfigFormat, PageConfig};
use crate::declaration::ProgressDeclaration;
use crate::error::PageError;
use crate::page::{Extent, PageInventory, ScrollSnapshot, Target};
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Element id of an inline configuration block.
pub(super) const CONFIG_SCRIPT_ID: &str = "folio-config";
/// Attribute carrying a fade-in element's registration index.
pub(super) const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

pub(super) struct PageNodes {
    pub(super) sections: Vec<Element>,
    pub(super) nav_links: Vec<Element>,
    pub(super) navbar: Option<Element>,
    pub(super) scroll_top_button: Option<Element>,
    pub(super) progress_bars: Vec<Element>,
    pub(super) fade_ins: Vec<Element>,
    pub(super) menu_collapse: Option<Element>,
    pub(super) menu_toggle: Option<Element>,
    pub(super) anchors: Vec<Element>,
    pub(super) hero_heading: Option<Element>,
    pub(super) forms: Vec<Element>,
    pub(super) images: Vec<Element>,
    pub(super) badges: Vec<Element>,
    pub(super) social_links: Vec<Element>,
    pub(super) email_links: Vec<Element>,
    pub(super) whatsapp_links: Vec<Element>,
}

impl PageNodes {
    pub(super) fn query(document: &Document, config: &PageConfig) -> Self {
        let selectors = &config.selectors;
        let fade_ins = query_all(document, &config.fade_in_selector());
        for (idx, element) in fade_ins.iter().enumerate() {
            if let Err(err) = element.set_attribute(REVEAL_INDEX_ATTR, &idx.to_string()) {
                debug!(index = idx, "Could not tag fade-in element: {err:?}");
            }
        }

        let nodes = PageNodes {
            sections: query_all(document, &selectors.sections)
                .into_iter()
                .filter(|element| !element.id().is_empty())
                .collect(),
            nav_links: query_all(document, &selectors.nav_links),
            navbar: query_required(document, &selectors.navbar),
            scroll_top_button: query_required(document, &selectors.scroll_top_button),
            progress_bars: query_all(document, &selectors.progress_bars),
            fade_ins,
            menu_collapse: query_required(document, &selectors.menu_collapse),
            menu_toggle: query_optional(document, &selectors.menu_toggle),
            anchors: query_all(document, &selectors.anchor_links),
            hero_heading: query_optional(document, &selectors.hero_heading),
            forms: query_all(document, &selectors.forms),
            images: query_all(document, &selectors.images),
            badges: query_all(document, &selectors.badges),
            social_links: query_all(document, &selectors.social_links),
            email_links: query_all(document, &selectors.email_link),
            whatsapp_links: query_all(document, &selectors.whatsapp_link),
        };
        debug!(
            sections = nodes.sections.len(),
            anchors = nodes.anchors.len(),
            images = nodes.images.len(),
            badges = nodes.badges.len(),
            "Queried page nodes"
        );
        nodes
    }

    pub(super) fn inventory(&self) -> PageInventory {
        PageInventory {
            section_ids: self.sections.iter().map(Element::id).collect(),
            nav_link_hrefs: self
                .nav_links
                .iter()
                .map(|link| link.get_attribute("href").unwrap_or_default())
                .collect(),
            progress_bars: self
                .progress_bars
                .iter()
                .map(|bar| ProgressDeclaration {
                    data_target: bar.get_attribute("data-target-width"),
                    style: bar.get_attribute("style"),
                })
                .collect(),
            fade_in_count: self.fade_ins.len(),
            hero_text: self
                .hero_heading
                .as_ref()
                .and_then(|heading| heading.text_content()),
        }
    }

    pub(super) fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Navbar => self.navbar.as_ref(),
            Target::ScrollTopButton => self.scroll_top_button.as_ref(),
            Target::MenuCollapse => self.menu_collapse.as_ref(),
            Target::HeroHeading => self.hero_heading.as_ref(),
            Target::NavLink(idx) => self.nav_links.get(idx),
            Target::ProgressBar(idx) => self.progress_bars.get(idx),
            Target::FadeIn(idx) => self.fade_ins.get(idx),
            Target::Image(idx) => self.images.get(idx),
            Target::Badge(idx) => self.badges.get(idx),
        }
    }

    /// Whether a click target sits inside the collapse container or its toggle.
    pub(super) fn is_inside_menu(&self, node: Option<&web_sys::Node>) -> bool {
        let Some(node) = node else {
            return false;
        };
        [self.menu_collapse.as_ref(), self.menu_toggle.as_ref()]
            .into_iter()
            .flatten()
            .any(|container| container.contains(Some(node)))
    }

    pub(super) fn menu_is_open(&self, open_class: &str) -> bool {
        self.menu_collapse
            .as_ref()
            .map(|menu| menu.class_list().contains(open_class))
            .unwrap_or(false)
    }

    pub(super) fn snapshot(&self, window: &Window) -> ScrollSnapshot {
        let offset_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        ScrollSnapshot {
            offset_y,
            viewport_height,
            section_extents: self
                .sections
                .iter()
                .map(|section| extent_of(section, offset_y))
                .collect(),
            progress_bar_tops: self
                .progress_bars
                .iter()
                .map(|bar| bar.get_bounding_client_rect().top())
                .collect(),
        }
    }
}

/// Document-relative extent; layout offsets when the node is an HTML element.
fn extent_of(element: &Element, offset_y: f64) -> Extent {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => Extent::new(f64::from(html.offset_top()), f64::from(html.offset_height())),
        None => {
            let rect = element.get_bounding_client_rect();
            Extent::new(rect.top() + offset_y, rect.height())
        }
    }
}

/// `offsetTop` of the element a same-page fragment points at.
pub(super) fn fragment_top(document: &Document, fragment: &str) -> Option<f64> {
    let target = match document.query_selector(fragment) {
        Ok(target) => target?,
        Err(err) => {
            debug!(fragment, "Fragment is not a valid selector: {err:?}");
            return None;
        }
    };
    let top = match target.dyn_ref::<HtmlElement>() {
        Some(html) => f64::from(html.offset_top()),
        None => target.get_bounding_client_rect().top() + window_offset(),
    };
    Some(top)
}

fn window_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Text and format of the inline `<script id="folio-config">` block.
pub(super) fn embedded_config(document: &Document) -> Option<(String, ConfigFormat)> {
    let script = document.get_element_by_id(CONFIG_SCRIPT_ID)?;
    let text = script.text_content()?;
    let format = ConfigFormat::from_script_type(script.get_attribute("type").as_deref());
    Some((text, format))
}

/// DOMContentLoaded time relative to navigation start, when reported.
pub(super) fn load_time_ms(window: &Window) -> Option<f64> {
    let timing = window.performance()?.timing();
    let start = timing.navigation_start();
    let loaded = timing.dom_content_loaded_event_end();
    (start > 0.0 && loaded >= start).then(|| loaded - start)
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            let err = PageError::Dom {
                operation: "querySelectorAll",
                detail: format!("{selector}: {err:?}"),
            };
            error!("{err}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_optional(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(err) => {
            let err = PageError::Dom {
                operation: "querySelector",
                detail: format!("{selector}: {err:?}"),
            };
            error!("{err}");
            None
        }
    }
}

fn query_required(document: &Document, selector: &str) -> Option<Element> {
    let element = query_optional(document, selector);
    if element.is_none() {
        let err = PageError::MissingElement {
            selector: selector.to_string(),
        };
        warn!("{err}; effects aimed at it are dropped");
    }
    element
}
