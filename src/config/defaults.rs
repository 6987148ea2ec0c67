pub(crate) fn default_highlight_lookahead_px() -> f64 {
    100.0
}

pub(crate) fn default_navbar_scrolled_after_px() -> f64 {
    50.0
}

pub(crate) fn default_scroll_top_visible_after_px() -> f64 {
    300.0
}

pub(crate) fn default_header_offset_px() -> f64 {
    80.0
}

pub(crate) fn default_progress_trigger_divisor() -> f64 {
    1.3
}

pub(crate) fn default_fade_threshold() -> f64 {
    0.1
}

pub(crate) fn default_fade_bottom_margin_px() -> f64 {
    100.0
}

pub(crate) fn default_fade_offset_px() -> f64 {
    30.0
}

pub(crate) fn default_fade_duration_secs() -> f64 {
    0.6
}

pub(crate) fn default_active_class() -> String {
    "active".to_string()
}

pub(crate) fn default_scrolled_class() -> String {
    "scrolled".to_string()
}

pub(crate) fn default_visible_class() -> String {
    "visible".to_string()
}

pub(crate) fn default_menu_open_class() -> String {
    "show".to_string()
}

pub(crate) fn default_typing_enabled() -> bool {
    true
}

pub(crate) fn default_typing_start_delay_ms() -> u32 {
    1000
}

pub(crate) fn default_typing_char_interval_ms() -> u32 {
    50
}

pub(crate) fn default_confirmation_message() -> String {
    "Pesan Anda telah dikirim! Terima kasih.".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_sections_selector() -> String {
    "section[id]".to_string()
}

pub(crate) fn default_nav_links_selector() -> String {
    ".nav-link".to_string()
}

pub(crate) fn default_navbar_selector() -> String {
    "#mainNav".to_string()
}

pub(crate) fn default_scroll_top_selector() -> String {
    "#scrollTopBtn".to_string()
}

pub(crate) fn default_progress_bars_selector() -> String {
    ".progress-bar".to_string()
}

pub(crate) fn default_fade_in_selectors() -> Vec<String> {
    [
        ".portfolio-card",
        ".timeline-item",
        ".skill-category",
        ".hobby-card",
        ".contact-card",
        ".interest-box",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(crate) fn default_menu_collapse_selector() -> String {
    ".navbar-collapse".to_string()
}

pub(crate) fn default_menu_toggle_selector() -> String {
    ".navbar-toggler".to_string()
}

pub(crate) fn default_anchor_links_selector() -> String {
    "a[href^=\"#\"]".to_string()
}

pub(crate) fn default_hero_heading_selector() -> String {
    ".hero-section h2".to_string()
}

pub(crate) fn default_forms_selector() -> String {
    "form".to_string()
}

pub(crate) fn default_images_selector() -> String {
    ".portfolio-card img, .hobby-card img".to_string()
}

pub(crate) fn default_badges_selector() -> String {
    ".badge".to_string()
}

pub(crate) fn default_social_links_selector() -> String {
    ".social-link".to_string()
}

pub(crate) fn default_email_link_selector() -> String {
    "a[href^=\"mailto:\"]".to_string()
}

pub(crate) fn default_whatsapp_link_selector() -> String {
    "a[href^=\"https://wa.me/\"]".to_string()
}
