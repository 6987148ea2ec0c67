mod chrome;
mod constants;
mod menu;
mod reveal;
mod sections;
mod typing;

use crate::config::PageConfig;
use crate::declaration::ProgressDeclaration;
use crate::error::{Capability, PageError};
use tracing::{debug, error, info, warn};

use super::update::{Effect, Target};

pub(in crate::page) use chrome::ChromeState;
pub(crate) use constants::*;
pub use menu::MobileMenu;
pub(in crate::page) use reveal::{ProgressBar, RevealState};
pub(in crate::page) use sections::SectionState;
pub(in crate::page) use typing::TypingState;

/// Browser features detected at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub intersection_observer: bool,
    pub smooth_scroll: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            intersection_observer: true,
            smooth_scroll: true,
        }
    }
}

impl Capabilities {
    pub fn missing(&self) -> Vec<Capability> {
        let mut missing = Vec::new();
        if !self.intersection_observer {
            missing.push(Capability::IntersectionObserver);
        }
        if !self.smooth_scroll {
            missing.push(Capability::SmoothScroll);
        }
        missing
    }
}

/// What the DOM adapter found when it queried the page once at mount.
/// Every later message refers to these elements by index.
#[derive(Debug, Clone, Default)]
pub struct PageInventory {
    pub section_ids: Vec<String>,
    pub nav_link_hrefs: Vec<String>,
    pub progress_bars: Vec<ProgressDeclaration>,
    pub fade_in_count: usize,
    pub hero_text: Option<String>,
}

/// Page controller composed of one sub-model per behavior.
pub struct PageController {
    pub(in crate::page) config: PageConfig,
    pub(in crate::page) capabilities: Capabilities,
    pub(in crate::page) sections: SectionState,
    pub(in crate::page) chrome: ChromeState,
    pub(in crate::page) reveal: RevealState,
    pub(in crate::page) menu: MobileMenu,
    pub(in crate::page) typing: Option<TypingState>,
}

impl PageController {
    /// Build the controller and the effects that put the page in its
    /// initial state (bars pinned, fade-ins hidden, heading cleared).
    pub fn bootstrap(
        config: PageConfig,
        inventory: PageInventory,
        capabilities: Capabilities,
    ) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        for capability in capabilities.missing() {
            let err = PageError::Unsupported { capability };
            match capability {
                Capability::SmoothScroll => {
                    warn!("{err}; falling back to instant scroll")
                }
                Capability::IntersectionObserver => {
                    warn!("{err}; fade-in animations are disabled")
                }
            }
        }

        let bars = Self::register_progress_bars(&inventory.progress_bars, &mut effects);

        let animated = capabilities.intersection_observer;
        if animated && inventory.fade_in_count > 0 {
            for idx in 0..inventory.fade_in_count {
                Self::push_hidden_styles(&config, idx, &mut effects);
            }
            effects.push(Effect::InjectStyleRule(config.revealed_style_rule()));
        }

        let typing = inventory
            .hero_text
            .as_deref()
            .filter(|text| config.typing_enabled && !text.trim().is_empty())
            .map(|text| {
                effects.push(Effect::SetText {
                    target: Target::HeroHeading,
                    text: String::new(),
                });
                effects.push(Effect::ScheduleTypingTick {
                    delay_ms: config.typing_start_delay_ms,
                });
                TypingState::new(text)
            });

        let sections = SectionState::new(&inventory.section_ids, &inventory.nav_link_hrefs);
        info!(
            sections = sections.sections.len(),
            nav_links = sections.links.len(),
            progress_bars = bars.len(),
            fade_ins = inventory.fade_in_count,
            typing = typing.is_some(),
            "Page behaviors attached"
        );
        info!("👋 Welcome! Thanks for stopping by this portfolio.");

        let controller = PageController {
            config,
            capabilities,
            sections,
            chrome: ChromeState::default(),
            reveal: RevealState {
                bars,
                faded_in: vec![false; inventory.fade_in_count],
                animated,
            },
            menu: MobileMenu::Closed,
            typing,
        };
        (controller, effects)
    }

    fn register_progress_bars(
        declarations: &[ProgressDeclaration],
        effects: &mut Vec<Effect>,
    ) -> Vec<ProgressBar> {
        declarations
            .iter()
            .enumerate()
            .map(|(idx, declaration)| match declaration.target_percent(idx) {
                Ok(target) => {
                    debug!(index = idx, target, "Registered progress bar");
                    effects.push(Effect::SetStyle {
                        target: Target::ProgressBar(idx),
                        property: "width",
                        value: PROGRESS_PINNED_WIDTH.to_string(),
                    });
                    ProgressBar {
                        target: Some(target),
                        revealed: false,
                    }
                }
                Err(err) => {
                    error!(index = idx, "{err}; bar left as declared");
                    ProgressBar {
                        target: None,
                        revealed: false,
                    }
                }
            })
            .collect()
    }

    fn push_hidden_styles(config: &PageConfig, idx: usize, effects: &mut Vec<Effect>) {
        let duration = config.fade_duration_secs.max(0.0);
        let target = Target::FadeIn(idx);
        effects.push(Effect::SetStyle {
            target,
            property: "opacity",
            value: "0".to_string(),
        });
        effects.push(Effect::SetStyle {
            target,
            property: "transform",
            value: format!("translateY({}px)", config.fade_offset_px),
        });
        effects.push(Effect::SetStyle {
            target,
            property: "transition",
            value: format!("opacity {duration}s ease, transform {duration}s ease"),
        });
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    /// Id of the section whose nav link currently holds the highlight.
    pub fn active_section(&self) -> Option<&str> {
        self.sections
            .active
            .and_then(|idx| self.sections.section_id(idx))
    }

    pub fn is_faded_in(&self, idx: usize) -> bool {
        self.reveal.faded_in.get(idx).copied().unwrap_or(false)
    }

    pub fn is_bar_revealed(&self, idx: usize) -> bool {
        self.reveal
            .bars
            .get(idx)
            .map(|bar| bar.revealed)
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(in crate::page) mod test_support {
    use super::*;

    pub(in crate::page) fn inventory() -> PageInventory {
        PageInventory {
            section_ids: ["home", "about", "portfolio", "contact"]
                .into_iter()
                .map(String::from)
                .collect(),
            nav_link_hrefs: ["#home", "#about", "#portfolio", "#contact"]
                .into_iter()
                .map(String::from)
                .collect(),
            progress_bars: vec![
                ProgressDeclaration::from_style("width: 75%"),
                ProgressDeclaration::from_style("width: 90%"),
            ],
            fade_in_count: 3,
            hero_text: Some("Web Developer".to_string()),
        }
    }

    pub(in crate::page) fn build_test_controller() -> PageController {
        let (controller, _effects) = PageController::bootstrap(
            PageConfig::default(),
            inventory(),
            Capabilities::default(),
        );
        controller
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::inventory;
    use super::*;

    #[test]
    fn bootstrap_pins_bars_and_hides_fade_ins() {
        let (_controller, effects) = PageController::bootstrap(
            PageConfig::default(),
            inventory(),
            Capabilities::default(),
        );

        for idx in 0..2 {
            assert!(effects.contains(&Effect::SetStyle {
                target: Target::ProgressBar(idx),
                property: "width",
                value: "0%".to_string(),
            }));
        }
        for idx in 0..3 {
            assert!(effects.contains(&Effect::SetStyle {
                target: Target::FadeIn(idx),
                property: "transition",
                value: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            }));
            assert!(effects.contains(&Effect::SetStyle {
                target: Target::FadeIn(idx),
                property: "transform",
                value: "translateY(30px)".to_string(),
            }));
        }
        assert_eq!(
            effects
                .iter()
                .filter(|effect| matches!(effect, Effect::InjectStyleRule(_)))
                .count(),
            1
        );
    }

    #[test]
    fn bootstrap_clears_heading_and_schedules_typing() {
        let (controller, effects) = PageController::bootstrap(
            PageConfig::default(),
            inventory(),
            Capabilities::default(),
        );
        assert!(controller.typing.is_some());
        assert!(effects.contains(&Effect::SetText {
            target: Target::HeroHeading,
            text: String::new(),
        }));
        assert!(effects.contains(&Effect::ScheduleTypingTick { delay_ms: 1000 }));
    }

    #[test]
    fn malformed_bar_is_excluded_without_affecting_others() {
        let mut inv = inventory();
        inv.progress_bars = vec![
            ProgressDeclaration::from_style("width: lots"),
            ProgressDeclaration::from_style("width: 40%"),
        ];
        let (controller, effects) =
            PageController::bootstrap(PageConfig::default(), inv, Capabilities::default());

        assert_eq!(controller.reveal.bars[0].target, None);
        assert_eq!(controller.reveal.bars[1].target, Some(40));
        assert!(!effects.iter().any(|effect| matches!(
            effect,
            Effect::SetStyle {
                target: Target::ProgressBar(0),
                ..
            }
        )));
        assert_eq!(controller.reveal.pending_bars(), 1);
    }

    #[test]
    fn without_intersection_support_elements_stay_visible() {
        let capabilities = Capabilities {
            intersection_observer: false,
            smooth_scroll: true,
        };
        let (controller, effects) =
            PageController::bootstrap(PageConfig::default(), inventory(), capabilities);

        assert!(!controller.reveal.animated);
        assert!(!effects.iter().any(|effect| matches!(
            effect,
            Effect::SetStyle {
                target: Target::FadeIn(_),
                ..
            } | Effect::InjectStyleRule(_)
        )));
    }

    #[test]
    fn typing_disabled_leaves_heading_alone() {
        let mut config = PageConfig::default();
        config.typing_enabled = false;
        let (controller, effects) =
            PageController::bootstrap(config, inventory(), Capabilities::default());
        assert!(controller.typing.is_none());
        assert!(!effects.iter().any(|effect| matches!(
            effect,
            Effect::SetText { .. } | Effect::ScheduleTypingTick { .. }
        )));
    }

    #[test]
    fn revealed_rule_is_scoped_to_fade_in_selectors() {
        let rule = PageConfig::default().revealed_style_rule();
        assert!(rule.contains(".portfolio-card.visible"));
        assert!(rule.contains(".interest-box.visible"));
        assert!(rule.contains("opacity: 1 !important;"));
        assert!(!rule.starts_with(".visible"));
    }
}
