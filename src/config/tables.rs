use super::defaults;
use super::models::{LogLevel, PageConfig, SelectorConfig};
use serde::Deserialize;

/// On-disk layout: one table per behavior area.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    selectors: SelectorConfig,
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    reveal: RevealConfig,
    #[serde(default)]
    classes: ClassConfig,
    #[serde(default)]
    typing: TypingConfig,
    #[serde(default)]
    forms: FormsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for PageConfig {
    fn from(tables: ConfigTables) -> Self {
        PageConfig {
            selectors: tables.selectors,
            highlight_lookahead_px: tables.scroll.highlight_lookahead_px,
            navbar_scrolled_after_px: tables.scroll.navbar_scrolled_after_px,
            scroll_top_visible_after_px: tables.scroll.scroll_top_visible_after_px,
            header_offset_px: tables.navigation.header_offset_px,
            progress_trigger_divisor: tables.reveal.progress_trigger_divisor,
            fade_threshold: tables.reveal.fade_threshold,
            fade_bottom_margin_px: tables.reveal.fade_bottom_margin_px,
            fade_offset_px: tables.reveal.fade_offset_px,
            fade_duration_secs: tables.reveal.fade_duration_secs,
            active_class: tables.classes.active,
            scrolled_class: tables.classes.scrolled,
            scroll_top_visible_class: tables.classes.scroll_top_visible,
            menu_open_class: tables.classes.menu_open,
            revealed_class: tables.classes.revealed,
            typing_enabled: tables.typing.enabled,
            typing_start_delay_ms: tables.typing.start_delay_ms,
            typing_char_interval_ms: tables.typing.char_interval_ms,
            confirmation_message: tables.forms.confirmation_message,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&PageConfig> for ConfigTables {
    fn from(config: &PageConfig) -> Self {
        ConfigTables {
            selectors: config.selectors.clone(),
            scroll: ScrollConfig {
                highlight_lookahead_px: config.highlight_lookahead_px,
                navbar_scrolled_after_px: config.navbar_scrolled_after_px,
                scroll_top_visible_after_px: config.scroll_top_visible_after_px,
            },
            navigation: NavigationConfig {
                header_offset_px: config.header_offset_px,
            },
            reveal: RevealConfig {
                progress_trigger_divisor: config.progress_trigger_divisor,
                fade_threshold: config.fade_threshold,
                fade_bottom_margin_px: config.fade_bottom_margin_px,
                fade_offset_px: config.fade_offset_px,
                fade_duration_secs: config.fade_duration_secs,
            },
            classes: ClassConfig {
                active: config.active_class.clone(),
                scrolled: config.scrolled_class.clone(),
                scroll_top_visible: config.scroll_top_visible_class.clone(),
                menu_open: config.menu_open_class.clone(),
                revealed: config.revealed_class.clone(),
            },
            typing: TypingConfig {
                enabled: config.typing_enabled,
                start_delay_ms: config.typing_start_delay_ms,
                char_interval_ms: config.typing_char_interval_ms,
            },
            forms: FormsConfig {
                confirmation_message: config.confirmation_message.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_highlight_lookahead_px")]
    highlight_lookahead_px: f64,
    #[serde(default = "defaults::default_navbar_scrolled_after_px")]
    navbar_scrolled_after_px: f64,
    #[serde(default = "defaults::default_scroll_top_visible_after_px")]
    scroll_top_visible_after_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            highlight_lookahead_px: defaults::default_highlight_lookahead_px(),
            navbar_scrolled_after_px: defaults::default_navbar_scrolled_after_px(),
            scroll_top_visible_after_px: defaults::default_scroll_top_visible_after_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_header_offset_px")]
    header_offset_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            header_offset_px: defaults::default_header_offset_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct RevealConfig {
    #[serde(default = "defaults::default_progress_trigger_divisor")]
    progress_trigger_divisor: f64,
    #[serde(default = "defaults::default_fade_threshold")]
    fade_threshold: f64,
    #[serde(default = "defaults::default_fade_bottom_margin_px")]
    fade_bottom_margin_px: f64,
    #[serde(default = "defaults::default_fade_offset_px")]
    fade_offset_px: f64,
    #[serde(default = "defaults::default_fade_duration_secs")]
    fade_duration_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            progress_trigger_divisor: defaults::default_progress_trigger_divisor(),
            fade_threshold: defaults::default_fade_threshold(),
            fade_bottom_margin_px: defaults::default_fade_bottom_margin_px(),
            fade_offset_px: defaults::default_fade_offset_px(),
            fade_duration_secs: defaults::default_fade_duration_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ClassConfig {
    #[serde(default = "defaults::default_active_class")]
    active: String,
    #[serde(default = "defaults::default_scrolled_class")]
    scrolled: String,
    #[serde(default = "defaults::default_visible_class")]
    scroll_top_visible: String,
    #[serde(default = "defaults::default_menu_open_class")]
    menu_open: String,
    #[serde(default = "defaults::default_visible_class")]
    revealed: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        ClassConfig {
            active: defaults::default_active_class(),
            scrolled: defaults::default_scrolled_class(),
            scroll_top_visible: defaults::default_visible_class(),
            menu_open: defaults::default_menu_open_class(),
            revealed: defaults::default_visible_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TypingConfig {
    #[serde(default = "defaults::default_typing_enabled")]
    enabled: bool,
    #[serde(default = "defaults::default_typing_start_delay_ms")]
    start_delay_ms: u32,
    #[serde(default = "defaults::default_typing_char_interval_ms")]
    char_interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            enabled: defaults::default_typing_enabled(),
            start_delay_ms: defaults::default_typing_start_delay_ms(),
            char_interval_ms: defaults::default_typing_char_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct FormsConfig {
    #[serde(default = "defaults::default_confirmation_message")]
    confirmation_message: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        FormsConfig {
            confirmation_message: defaults::default_confirmation_message(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
