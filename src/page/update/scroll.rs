use super::super::messages::ScrollSnapshot;
use super::super::state::PageController;
use super::{Effect, Target};
use tracing::{debug, trace};

impl PageController {
    pub(super) fn handle_scrolled(
        &mut self,
        snapshot: &ScrollSnapshot,
        effects: &mut Vec<Effect>,
    ) {
        let offset = if snapshot.offset_y.is_finite() {
            snapshot.offset_y.max(0.0)
        } else {
            0.0
        };
        trace!(offset, "Scroll event");

        self.highlight_section(offset, snapshot, effects);
        self.sync_chrome(offset, effects);
        self.fill_progress_bars(snapshot, effects);
    }

    pub(super) fn handle_scroll_top_clicked(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollTo {
            top: 0.0,
            mode: self.scroll_mode(),
        });
    }

    /// Move the highlight to the section under `offset + lookahead`. A
    /// position that falls in no section keeps the previous highlight.
    fn highlight_section(
        &mut self,
        offset: f64,
        snapshot: &ScrollSnapshot,
        effects: &mut Vec<Effect>,
    ) {
        let position = offset + self.config.highlight_lookahead_px;
        let Some(section_idx) = self
            .sections
            .section_at(position, &snapshot.section_extents)
        else {
            return;
        };
        if self.sections.active == Some(section_idx) {
            return;
        }

        self.sections.active = Some(section_idx);
        for (link_idx, link) in self.sections.links.iter().enumerate() {
            effects.push(Effect::SetClass {
                target: Target::NavLink(link_idx),
                class: self.config.active_class.clone(),
                enabled: link.section == Some(section_idx),
            });
        }
        debug!(
            section = self.sections.section_id(section_idx).unwrap_or_default(),
            position, "Active section changed"
        );
    }

    fn sync_chrome(&mut self, offset: f64, effects: &mut Vec<Effect>) {
        let scrolled = offset > self.config.navbar_scrolled_after_px;
        if self.chrome.navbar_scrolled != Some(scrolled) {
            self.chrome.navbar_scrolled = Some(scrolled);
            effects.push(Effect::SetClass {
                target: Target::Navbar,
                class: self.config.scrolled_class.clone(),
                enabled: scrolled,
            });
        }

        let visible = offset > self.config.scroll_top_visible_after_px;
        if self.chrome.scroll_top_visible != Some(visible) {
            self.chrome.scroll_top_visible = Some(visible);
            effects.push(Effect::SetClass {
                target: Target::ScrollTopButton,
                class: self.config.scroll_top_visible_class.clone(),
                enabled: visible,
            });
        }
    }

    /// Fill every pending bar whose top has crossed `viewport / divisor`.
    /// Filling is one-way; revealed bars are never checked again.
    fn fill_progress_bars(&mut self, snapshot: &ScrollSnapshot, effects: &mut Vec<Effect>) {
        if self.reveal.pending_bars() == 0 {
            return;
        }
        let divisor = if self.config.progress_trigger_divisor > 0.0 {
            self.config.progress_trigger_divisor
        } else {
            1.0
        };
        let trigger_line = snapshot.viewport_height / divisor;

        for (idx, (bar, top)) in self
            .reveal
            .bars
            .iter_mut()
            .zip(&snapshot.progress_bar_tops)
            .enumerate()
        {
            if bar.revealed {
                continue;
            }
            let Some(target) = bar.target else {
                continue;
            };
            if *top < trigger_line {
                bar.revealed = true;
                effects.push(Effect::SetStyle {
                    target: Target::ProgressBar(idx),
                    property: "width",
                    value: format!("{target}%"),
                });
                debug!(index = idx, target, "Progress bar revealed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::{Extent, Message};
    use super::super::super::state::test_support::build_test_controller;
    use super::*;

    /// home [0, 400), about [400, 900), portfolio [900, 1500), contact [1600, 2200)
    fn snapshot(offset_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            offset_y,
            viewport_height: 800.0,
            section_extents: vec![
                Extent::new(0.0, 400.0),
                Extent::new(400.0, 500.0),
                Extent::new(900.0, 600.0),
                Extent::new(1600.0, 600.0),
            ],
            progress_bar_tops: vec![2000.0 - offset_y, 2400.0 - offset_y],
        }
    }

    fn active_links(effects: &[Effect]) -> Vec<(usize, bool)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::SetClass {
                    target: Target::NavLink(idx),
                    enabled,
                    ..
                } => Some((*idx, *enabled)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn offset_inside_about_highlights_only_about() {
        let mut controller = build_test_controller();
        // 450 + 100 lookahead lands in "about".
        let effects = controller.update(Message::Scrolled(snapshot(450.0)));

        assert_eq!(controller.active_section(), Some("about"));
        assert_eq!(
            active_links(&effects),
            vec![(0, false), (1, true), (2, false), (3, false)]
        );
    }

    #[test]
    fn exactly_one_link_active_inside_each_section() {
        let mut controller = build_test_controller();
        let expected = [
            (0.0, "home"),
            (350.0, "about"),
            (850.0, "portfolio"),
            (1550.0, "contact"),
        ];
        for (offset, section) in expected {
            let effects = controller.update(Message::Scrolled(snapshot(offset)));
            assert_eq!(controller.active_section(), Some(section));
            let active = active_links(&effects)
                .into_iter()
                .filter(|(_, enabled)| *enabled)
                .count();
            assert_eq!(active, 1, "offset {offset} should activate one link");
        }
    }

    #[test]
    fn gap_between_sections_keeps_previous_highlight() {
        let mut controller = build_test_controller();
        controller.update(Message::Scrolled(snapshot(850.0)));
        assert_eq!(controller.active_section(), Some("portfolio"));

        // 1450 + 100 = 1550 falls in the [1500, 1600) gap.
        let effects = controller.update(Message::Scrolled(snapshot(1450.0)));
        assert_eq!(controller.active_section(), Some("portfolio"));
        assert!(active_links(&effects).is_empty());
    }

    #[test]
    fn unchanged_section_emits_no_class_churn() {
        let mut controller = build_test_controller();
        controller.update(Message::Scrolled(snapshot(420.0)));
        let effects = controller.update(Message::Scrolled(snapshot(430.0)));
        assert!(active_links(&effects).is_empty());
    }

    #[test]
    fn navbar_and_scroll_top_follow_thresholds() {
        let mut controller = build_test_controller();
        for offset in [0.0, 50.0, 50.5, 300.0, 301.0, 120.0, 10.0] {
            controller.update(Message::Scrolled(snapshot(offset)));
            assert_eq!(controller.chrome.navbar_scrolled, Some(offset > 50.0));
            assert_eq!(controller.chrome.scroll_top_visible, Some(offset > 300.0));
        }
    }

    #[test]
    fn first_scroll_always_syncs_chrome() {
        let mut controller = build_test_controller();
        let effects = controller.update(Message::Scrolled(snapshot(0.0)));
        assert!(effects.contains(&Effect::SetClass {
            target: Target::Navbar,
            class: "scrolled".to_string(),
            enabled: false,
        }));
        assert!(effects.contains(&Effect::SetClass {
            target: Target::ScrollTopButton,
            class: "visible".to_string(),
            enabled: false,
        }));
        let effects = controller.update(Message::Scrolled(snapshot(10.0)));
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SetClass { target: Target::Navbar, .. }))
        );
    }

    #[test]
    fn progress_bar_fills_once_inside_trigger_zone() {
        let mut controller = build_test_controller();
        // Trigger line is 800 / 1.3 ≈ 615; bar 0 sits at 2000 - offset.
        let effects = controller.update(Message::Scrolled(snapshot(1000.0)));
        assert!(!controller.is_bar_revealed(0));
        assert!(!effects.iter().any(|e| matches!(e, Effect::SetStyle { .. })));

        let effects = controller.update(Message::Scrolled(snapshot(1400.0)));
        assert!(controller.is_bar_revealed(0));
        assert!(!controller.is_bar_revealed(1));
        assert!(effects.contains(&Effect::SetStyle {
            target: Target::ProgressBar(0),
            property: "width",
            value: "75%".to_string(),
        }));

        // Scrolling back up never un-fills the bar.
        let effects = controller.update(Message::Scrolled(snapshot(0.0)));
        assert!(controller.is_bar_revealed(0));
        assert!(!effects.iter().any(|e| matches!(
            e,
            Effect::SetStyle {
                target: Target::ProgressBar(0),
                ..
            }
        )));
    }

    #[test]
    fn section_bottom_edge_belongs_to_the_next_section() {
        let mut controller = build_test_controller();
        // 299 + 100 = 399 is the last pixel of "home".
        controller.update(Message::Scrolled(snapshot(299.0)));
        assert_eq!(controller.active_section(), Some("home"));

        // 300 + 100 = 400 is the first pixel of "about".
        controller.update(Message::Scrolled(snapshot(300.0)));
        assert_eq!(controller.active_section(), Some("about"));
    }

    #[test]
    fn bar_on_the_trigger_line_stays_empty() {
        let mut controller = build_test_controller();
        let at_line = |first_bar_top: f64| ScrollSnapshot {
            viewport_height: 1300.0,
            progress_bar_tops: vec![first_bar_top, 5000.0],
            ..snapshot(0.0)
        };

        // 1300 / 1.3 = 1000: the trigger comparison is strict.
        controller.update(Message::Scrolled(at_line(1000.0)));
        assert!(!controller.is_bar_revealed(0));

        let effects = controller.update(Message::Scrolled(at_line(999.0)));
        assert!(controller.is_bar_revealed(0));
        assert!(effects.contains(&Effect::SetStyle {
            target: Target::ProgressBar(0),
            property: "width",
            value: "75%".to_string(),
        }));
    }

    #[test]
    fn scroll_top_click_requests_smooth_scroll_home() {
        let mut controller = build_test_controller();
        let effects = controller.update(Message::ScrollTopClicked);
        assert_eq!(
            effects,
            vec![Effect::ScrollTo {
                top: 0.0,
                mode: super::super::ScrollMode::Smooth,
            }]
        );
    }
}
