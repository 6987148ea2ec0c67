use super::super::messages::Message;
use super::super::state::PageController;
use super::{Effect, ScrollMode};

impl PageController {
    /// Apply one event and return the DOM work it implies.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled(snapshot) => self.handle_scrolled(&snapshot, &mut effects),
            Message::ScrollTopClicked => self.handle_scroll_top_clicked(&mut effects),
            Message::AnchorActivated {
                href,
                target_top,
                menu_open,
            } => self.handle_anchor_activated(&href, target_top, menu_open, &mut effects),
            Message::DocumentClicked {
                inside_menu,
                menu_open,
            } => self.handle_document_clicked(inside_menu, menu_open, &mut effects),
            Message::Intersected {
                index,
                is_intersecting,
            } => self.handle_intersected(index, is_intersecting, &mut effects),
            Message::RevealUnavailable => self.handle_reveal_unavailable(&mut effects),
            Message::TypingTick => self.handle_typing_tick(&mut effects),
            Message::FormSubmitted { index } => self.handle_form_submitted(index, &mut effects),
            Message::ImageFailed { index, src } => {
                self.handle_image_failed(index, &src, &mut effects)
            }
            Message::BadgeHovered { index, entered } => {
                self.handle_badge_hovered(index, entered, &mut effects)
            }
            Message::LinkClicked { channel, label } => {
                self.handle_link_clicked(channel, label.as_deref())
            }
            Message::Loaded { load_time_ms } => self.handle_loaded(load_time_ms),
        }

        effects
    }

    pub(super) fn scroll_mode(&self) -> ScrollMode {
        if self.capabilities.smooth_scroll {
            ScrollMode::Smooth
        } else {
            ScrollMode::Instant
        }
    }
}
