use super::super::state::PageController;
use super::{Effect, Target};
use tracing::debug;

impl PageController {
    pub(super) fn handle_typing_tick(&mut self, effects: &mut Vec<Effect>) {
        let Some(typing) = self.typing.as_mut() else {
            return;
        };
        let Some(text) = typing.advance() else {
            return;
        };
        effects.push(Effect::SetText {
            target: Target::HeroHeading,
            text,
        });

        if typing.is_complete() {
            debug!(chars = typing.chars.len(), "Typing effect finished");
        } else {
            effects.push(Effect::ScheduleTypingTick {
                delay_ms: self.config.typing_char_interval_ms,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_support::build_test_controller;
    use super::*;

    #[test]
    fn each_tick_reveals_one_character_then_stops() {
        let mut controller = build_test_controller();
        let expected = "Web Developer";
        let mut shown = Vec::new();

        loop {
            let effects = controller.update(Message::TypingTick);
            if effects.is_empty() {
                break;
            }
            let text = effects
                .iter()
                .find_map(|effect| match effect {
                    Effect::SetText { text, .. } => Some(text.clone()),
                    _ => None,
                })
                .expect("tick writes heading text");
            let reschedules = effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleTypingTick { delay_ms: 50 }));
            assert_eq!(reschedules, text.len() < expected.len());
            shown.push(text);
        }

        assert_eq!(shown.len(), expected.chars().count());
        assert_eq!(shown.first().map(String::as_str), Some("W"));
        assert_eq!(shown.last().map(String::as_str), Some(expected));
        assert!(controller.update(Message::TypingTick).is_empty());
    }
}
