/// Last-applied navbar and scroll-to-top state. `None` until the first sync,
/// so the first scroll event always writes both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeState {
    pub(in crate::page) navbar_scrolled: Option<bool>,
    pub(in crate::page) scroll_top_visible: Option<bool>,
}
