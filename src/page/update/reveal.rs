use super::super::state::PageController;
use super::{Effect, Target};
use tracing::{debug, warn};

impl PageController {
    /// First intersection adds the terminal class; later reports for the
    /// same element are ignored.
    pub(super) fn handle_intersected(
        &mut self,
        index: usize,
        is_intersecting: bool,
        effects: &mut Vec<Effect>,
    ) {
        if !is_intersecting || !self.reveal.animated {
            return;
        }
        let Some(faded_in) = self.reveal.faded_in.get_mut(index) else {
            warn!(index, "Intersection reported for unregistered element");
            return;
        };
        if *faded_in {
            return;
        }

        *faded_in = true;
        effects.push(Effect::SetClass {
            target: Target::FadeIn(index),
            class: self.config.revealed_class.clone(),
            enabled: true,
        });
        debug!(index, "Element faded in");
    }

    /// Show every element that is still hidden and stop animating.
    pub(super) fn handle_reveal_unavailable(&mut self, effects: &mut Vec<Effect>) {
        if !self.reveal.animated {
            return;
        }
        self.reveal.animated = false;
        let mut shown = 0;
        for (index, faded_in) in self.reveal.faded_in.iter_mut().enumerate() {
            if *faded_in {
                continue;
            }
            *faded_in = true;
            shown += 1;
            effects.push(Effect::SetClass {
                target: Target::FadeIn(index),
                class: self.config.revealed_class.clone(),
                enabled: true,
            });
        }
        warn!(shown, "Fade-in watcher unavailable; revealing all elements");
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_support::build_test_controller;
    use super::*;

    fn intersect(index: usize, is_intersecting: bool) -> Message {
        Message::Intersected {
            index,
            is_intersecting,
        }
    }

    #[test]
    fn first_intersection_adds_visible_class() {
        let mut controller = build_test_controller();
        let effects = controller.update(intersect(1, true));
        assert_eq!(
            effects,
            vec![Effect::SetClass {
                target: Target::FadeIn(1),
                class: "visible".to_string(),
                enabled: true,
            }]
        );
        assert!(controller.is_faded_in(1));
        assert!(!controller.is_faded_in(0));
    }

    #[test]
    fn repeated_reports_are_idempotent_and_never_hide() {
        let mut controller = build_test_controller();
        controller.update(intersect(0, true));

        assert!(controller.update(intersect(0, true)).is_empty());
        assert!(controller.update(intersect(0, false)).is_empty());
        assert!(controller.is_faded_in(0));
        assert!(
            !controller
                .update(intersect(0, true))
                .iter()
                .any(|effect| matches!(effect, Effect::SetClass { enabled: false, .. }))
        );
    }

    #[test]
    fn leaving_before_first_entry_does_nothing() {
        let mut controller = build_test_controller();
        assert!(controller.update(intersect(2, false)).is_empty());
        assert!(!controller.is_faded_in(2));
    }

    #[test]
    fn watcher_failure_reveals_every_hidden_element() {
        let mut controller = build_test_controller();
        controller.update(intersect(1, true));

        let effects = controller.update(Message::RevealUnavailable);
        assert_eq!(
            effects,
            vec![
                Effect::SetClass {
                    target: Target::FadeIn(0),
                    class: "visible".to_string(),
                    enabled: true,
                },
                Effect::SetClass {
                    target: Target::FadeIn(2),
                    class: "visible".to_string(),
                    enabled: true,
                },
            ]
        );
        assert!((0..3).all(|idx| controller.is_faded_in(idx)));
        assert!(controller.update(Message::RevealUnavailable).is_empty());
        assert!(controller.update(intersect(0, true)).is_empty());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut controller = build_test_controller();
        assert!(controller.update(intersect(42, true)).is_empty());
    }
}
