use serde::Deserialize;

/// High-level page configuration; deserializable from TOML or JSON.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct PageConfig {
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default = "crate::config::defaults::default_highlight_lookahead_px")]
    pub highlight_lookahead_px: f64,
    #[serde(default = "crate::config::defaults::default_navbar_scrolled_after_px")]
    pub navbar_scrolled_after_px: f64,
    #[serde(default = "crate::config::defaults::default_scroll_top_visible_after_px")]
    pub scroll_top_visible_after_px: f64,
    #[serde(default = "crate::config::defaults::default_header_offset_px")]
    pub header_offset_px: f64,
    #[serde(default = "crate::config::defaults::default_progress_trigger_divisor")]
    pub progress_trigger_divisor: f64,
    #[serde(default = "crate::config::defaults::default_fade_threshold")]
    pub fade_threshold: f64,
    #[serde(default = "crate::config::defaults::default_fade_bottom_margin_px")]
    pub fade_bottom_margin_px: f64,
    #[serde(default = "crate::config::defaults::default_fade_offset_px")]
    pub fade_offset_px: f64,
    #[serde(default = "crate::config::defaults::default_fade_duration_secs")]
    pub fade_duration_secs: f64,
    #[serde(default = "crate::config::defaults::default_active_class")]
    pub active_class: String,
    #[serde(default = "crate::config::defaults::default_scrolled_class")]
    pub scrolled_class: String,
    #[serde(default = "crate::config::defaults::default_visible_class")]
    pub scroll_top_visible_class: String,
    #[serde(default = "crate::config::defaults::default_menu_open_class")]
    pub menu_open_class: String,
    #[serde(default = "crate::config::defaults::default_visible_class")]
    pub revealed_class: String,
    #[serde(default = "crate::config::defaults::default_typing_enabled")]
    pub typing_enabled: bool,
    #[serde(default = "crate::config::defaults::default_typing_start_delay_ms")]
    pub typing_start_delay_ms: u32,
    #[serde(default = "crate::config::defaults::default_typing_char_interval_ms")]
    pub typing_char_interval_ms: u32,
    #[serde(default = "crate::config::defaults::default_confirmation_message")]
    pub confirmation_message: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            selectors: SelectorConfig::default(),
            highlight_lookahead_px: crate::config::defaults::default_highlight_lookahead_px(),
            navbar_scrolled_after_px: crate::config::defaults::default_navbar_scrolled_after_px(),
            scroll_top_visible_after_px:
                crate::config::defaults::default_scroll_top_visible_after_px(),
            header_offset_px: crate::config::defaults::default_header_offset_px(),
            progress_trigger_divisor: crate::config::defaults::default_progress_trigger_divisor(),
            fade_threshold: crate::config::defaults::default_fade_threshold(),
            fade_bottom_margin_px: crate::config::defaults::default_fade_bottom_margin_px(),
            fade_offset_px: crate::config::defaults::default_fade_offset_px(),
            fade_duration_secs: crate::config::defaults::default_fade_duration_secs(),
            active_class: crate::config::defaults::default_active_class(),
            scrolled_class: crate::config::defaults::default_scrolled_class(),
            scroll_top_visible_class: crate::config::defaults::default_visible_class(),
            menu_open_class: crate::config::defaults::default_menu_open_class(),
            revealed_class: crate::config::defaults::default_visible_class(),
            typing_enabled: crate::config::defaults::default_typing_enabled(),
            typing_start_delay_ms: crate::config::defaults::default_typing_start_delay_ms(),
            typing_char_interval_ms: crate::config::defaults::default_typing_char_interval_ms(),
            confirmation_message: crate::config::defaults::default_confirmation_message(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl PageConfig {
    /// Replace values the browser would reject. Returns the names of the
    /// adjusted keys.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let mut adjusted = Vec::new();
        if !self.fade_threshold.is_finite() {
            self.fade_threshold = crate::config::defaults::default_fade_threshold();
            adjusted.push("reveal.fade_threshold");
        } else if !(0.0..=1.0).contains(&self.fade_threshold) {
            self.fade_threshold = self.fade_threshold.clamp(0.0, 1.0);
            adjusted.push("reveal.fade_threshold");
        }
        let mut finite_or_default = |value: &mut f64, default: f64, key: &'static str| {
            if !value.is_finite() {
                *value = default;
                adjusted.push(key);
            }
        };
        finite_or_default(
            &mut self.fade_bottom_margin_px,
            crate::config::defaults::default_fade_bottom_margin_px(),
            "reveal.fade_bottom_margin_px",
        );
        finite_or_default(
            &mut self.fade_offset_px,
            crate::config::defaults::default_fade_offset_px(),
            "reveal.fade_offset_px",
        );
        finite_or_default(
            &mut self.fade_duration_secs,
            crate::config::defaults::default_fade_duration_secs(),
            "reveal.fade_duration_secs",
        );
        finite_or_default(
            &mut self.header_offset_px,
            crate::config::defaults::default_header_offset_px(),
            "navigation.header_offset_px",
        );
        finite_or_default(
            &mut self.highlight_lookahead_px,
            crate::config::defaults::default_highlight_lookahead_px(),
            "scroll.highlight_lookahead_px",
        );
        finite_or_default(
            &mut self.navbar_scrolled_after_px,
            crate::config::defaults::default_navbar_scrolled_after_px(),
            "scroll.navbar_scrolled_after_px",
        );
        finite_or_default(
            &mut self.scroll_top_visible_after_px,
            crate::config::defaults::default_scroll_top_visible_after_px(),
            "scroll.scroll_top_visible_after_px",
        );
        if !(self.progress_trigger_divisor.is_finite() && self.progress_trigger_divisor > 0.0) {
            self.progress_trigger_divisor =
                crate::config::defaults::default_progress_trigger_divisor();
            adjusted.push("reveal.progress_trigger_divisor");
        }
        adjusted
    }

    /// Root margin handed to the intersection watcher. Only the bottom edge
    /// is pulled in, so reveals fire slightly before an element is fully in view.
    pub fn fade_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.fade_bottom_margin_px.max(0.0))
    }

    /// Terminal-state rule injected at startup, scoped to the fade-in selectors.
    pub fn revealed_style_rule(&self) -> String {
        let scoped = self
            .selectors
            .fade_in
            .iter()
            .map(|selector| format!("{}.{}", selector.trim(), self.revealed_class))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{scoped} {{\n    opacity: 1 !important;\n    transform: translateY(0) !important;\n}}")
    }

    pub fn fade_in_selector(&self) -> String {
        self.selectors.fade_in.join(", ")
    }
}

/// CSS selectors for every element the page layer attaches to.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq, Eq)]
pub struct SelectorConfig {
    #[serde(default = "crate::config::defaults::default_sections_selector")]
    pub sections: String,
    #[serde(default = "crate::config::defaults::default_nav_links_selector")]
    pub nav_links: String,
    #[serde(default = "crate::config::defaults::default_navbar_selector")]
    pub navbar: String,
    #[serde(default = "crate::config::defaults::default_scroll_top_selector")]
    pub scroll_top_button: String,
    #[serde(default = "crate::config::defaults::default_progress_bars_selector")]
    pub progress_bars: String,
    #[serde(default = "crate::config::defaults::default_fade_in_selectors")]
    pub fade_in: Vec<String>,
    #[serde(default = "crate::config::defaults::default_menu_collapse_selector")]
    pub menu_collapse: String,
    #[serde(default = "crate::config::defaults::default_menu_toggle_selector")]
    pub menu_toggle: String,
    #[serde(default = "crate::config::defaults::default_anchor_links_selector")]
    pub anchor_links: String,
    #[serde(default = "crate::config::defaults::default_hero_heading_selector")]
    pub hero_heading: String,
    #[serde(default = "crate::config::defaults::default_forms_selector")]
    pub forms: String,
    #[serde(default = "crate::config::defaults::default_images_selector")]
    pub images: String,
    #[serde(default = "crate::config::defaults::default_badges_selector")]
    pub badges: String,
    #[serde(default = "crate::config::defaults::default_social_links_selector")]
    pub social_links: String,
    #[serde(default = "crate::config::defaults::default_email_link_selector")]
    pub email_link: String,
    #[serde(default = "crate::config::defaults::default_whatsapp_link_selector")]
    pub whatsapp_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            sections: crate::config::defaults::default_sections_selector(),
            nav_links: crate::config::defaults::default_nav_links_selector(),
            navbar: crate::config::defaults::default_navbar_selector(),
            scroll_top_button: crate::config::defaults::default_scroll_top_selector(),
            progress_bars: crate::config::defaults::default_progress_bars_selector(),
            fade_in: crate::config::defaults::default_fade_in_selectors(),
            menu_collapse: crate::config::defaults::default_menu_collapse_selector(),
            menu_toggle: crate::config::defaults::default_menu_toggle_selector(),
            anchor_links: crate::config::defaults::default_anchor_links_selector(),
            hero_heading: crate::config::defaults::default_hero_heading_selector(),
            forms: crate::config::defaults::default_forms_selector(),
            images: crate::config::defaults::default_images_selector(),
            badges: crate::config::defaults::default_badges_selector(),
            social_links: crate::config::defaults::default_social_links_selector(),
            email_link: crate::config::defaults::default_email_link_selector(),
            whatsapp_link: crate::config::defaults::default_whatsapp_link_selector(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
