/// Inline styles applied by the affordance handlers.
pub(crate) const PROGRESS_PINNED_WIDTH: &str = "0%";
pub(crate) const BADGE_LIFTED_TRANSFORM: &str = "translateY(-3px) scale(1.05)";
pub(crate) const BADGE_RESTING_TRANSFORM: &str = "translateY(0) scale(1)";
pub(crate) const IMAGE_FALLBACK_STYLES: [(&str, &str); 4] = [
    ("background-color", "#2a2a3e"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
];
pub(crate) const EMPTY_FRAGMENT: &str = "#";
