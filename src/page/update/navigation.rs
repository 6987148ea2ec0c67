use super::super::state::{EMPTY_FRAGMENT, MobileMenu, PageController};
use super::{Effect, Target};
use crate::error::PageError;
use tracing::{debug, info, warn};

impl PageController {
    /// Same-page anchor click: cancel the jump, close the menu, scroll to the
    /// target minus the fixed header height.
    pub(super) fn handle_anchor_activated(
        &mut self,
        href: &str,
        target_top: Option<f64>,
        menu_open: bool,
        effects: &mut Vec<Effect>,
    ) {
        self.menu = MobileMenu::observed(menu_open);
        effects.push(Effect::PreventDefault);

        if href.trim() == EMPTY_FRAGMENT {
            return;
        }

        let Some(target_top) = target_top.filter(|top| top.is_finite()) else {
            let err = PageError::MissingTarget {
                fragment: href.to_string(),
            };
            warn!("{err}; ignoring link");
            return;
        };

        self.close_menu(effects);
        let top = (target_top - self.config.header_offset_px).max(0.0);
        effects.push(Effect::ScrollTo {
            top,
            mode: self.scroll_mode(),
        });
        info!(fragment = %href, top, "Scrolling to anchor");
    }

    /// Clicks outside the collapse container and its toggle close the menu.
    pub(super) fn handle_document_clicked(
        &mut self,
        inside_menu: bool,
        menu_open: bool,
        effects: &mut Vec<Effect>,
    ) {
        self.menu = MobileMenu::observed(menu_open);
        if inside_menu {
            return;
        }
        self.close_menu(effects);
    }

    fn close_menu(&mut self, effects: &mut Vec<Effect>) {
        if !self.menu.is_open() {
            return;
        }
        self.menu = MobileMenu::Closed;
        effects.push(Effect::SetClass {
            target: Target::MenuCollapse,
            class: self.config.menu_open_class.clone(),
            enabled: false,
        });
        debug!("Closed mobile menu");
    }
}
