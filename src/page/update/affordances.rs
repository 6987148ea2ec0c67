use super::super::messages::LinkChannel;
use super::super::state::{
    BADGE_LIFTED_TRANSFORM, BADGE_RESTING_TRANSFORM, IMAGE_FALLBACK_STYLES, PageController,
};
use super::{Effect, Target};
use tracing::{info, warn};

impl PageController {
    /// Contact forms have no backend: acknowledge and clear.
    pub(super) fn handle_form_submitted(&mut self, index: usize, effects: &mut Vec<Effect>) {
        info!(index, "Form submitted");
        effects.push(Effect::PreventDefault);
        effects.push(Effect::ShowAlert(self.config.confirmation_message.clone()));
        effects.push(Effect::ResetForm(index));
    }

    pub(super) fn handle_image_failed(&mut self, index: usize, src: &str, effects: &mut Vec<Effect>) {
        warn!(index, src, "Image failed to load; applying placeholder styling");
        for (property, value) in IMAGE_FALLBACK_STYLES {
            effects.push(Effect::SetStyle {
                target: Target::Image(index),
                property,
                value: value.to_string(),
            });
        }
    }

    pub(super) fn handle_badge_hovered(
        &mut self,
        index: usize,
        entered: bool,
        effects: &mut Vec<Effect>,
    ) {
        let transform = if entered {
            BADGE_LIFTED_TRANSFORM
        } else {
            BADGE_RESTING_TRANSFORM
        };
        effects.push(Effect::SetStyle {
            target: Target::Badge(index),
            property: "transform",
            value: transform.to_string(),
        });
    }

    pub(super) fn handle_link_clicked(&mut self, channel: LinkChannel, label: Option<&str>) {
        match channel {
            LinkChannel::Email => info!("Email link clicked; opening default mail client"),
            LinkChannel::WhatsApp => info!("WhatsApp link clicked; opening chat"),
            LinkChannel::Social => {
                info!(platform = label.unwrap_or("unknown"), "Social link clicked")
            }
        }
    }

    pub(super) fn handle_loaded(&mut self, load_time_ms: Option<f64>) {
        match load_time_ms.filter(|ms| ms.is_finite() && *ms >= 0.0) {
            Some(ms) => info!(load_time_ms = ms.round(), "⚡ Page loaded"),
            None => info!("Page loaded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_support::build_test_controller;
    use super::*;

    #[test]
    fn form_submit_prevents_default_alerts_and_resets() {
        let mut controller = build_test_controller();
        let effects = controller.update(Message::FormSubmitted { index: 2 });
        assert_eq!(
            effects,
            vec![
                Effect::PreventDefault,
                Effect::ShowAlert("Pesan Anda telah dikirim! Terima kasih.".to_string()),
                Effect::ResetForm(2),
            ]
        );
    }

    #[test]
    fn failed_image_gets_placeholder_styles() {
        let mut controller = build_test_controller();
        let effects = controller.update(Message::ImageFailed {
            index: 1,
            src: "img/missing.png".to_string(),
        });
        assert_eq!(effects.len(), 4);
        assert!(effects.contains(&Effect::SetStyle {
            target: Target::Image(1),
            property: "background-color",
            value: "#2a2a3e".to_string(),
        }));
    }

    #[test]
    fn badge_lifts_on_enter_and_rests_on_leave() {
        let mut controller = build_test_controller();
        let lifted = controller.update(Message::BadgeHovered {
            index: 0,
            entered: true,
        });
        let rested = controller.update(Message::BadgeHovered {
            index: 0,
            entered: false,
        });
        assert_eq!(
            lifted,
            vec![Effect::SetStyle {
                target: Target::Badge(0),
                property: "transform",
                value: "translateY(-3px) scale(1.05)".to_string(),
            }]
        );
        assert_eq!(
            rested,
            vec![Effect::SetStyle {
                target: Target::Badge(0),
                property: "transform",
                value: "translateY(0) scale(1)".to_string(),
            }]
        );
    }

    #[test]
    fn reporting_only_messages_touch_nothing() {
        let mut controller = build_test_controller();
        assert!(
            controller
                .update(Message::LinkClicked {
                    channel: LinkChannel::Social,
                    label: Some("GitHub".to_string()),
                })
                .is_empty()
        );
        assert!(
            controller
                .update(Message::Loaded {
                    load_time_ms: Some(412.0),
                })
                .is_empty()
        );
    }
}
