/// Mobile navigation collapse. Opening is owned by the external toggle
/// control; the controller only observes it and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        matches!(self, MobileMenu::Open)
    }

    pub(in crate::page) fn observed(open: bool) -> Self {
        if open {
            MobileMenu::Open
        } else {
            MobileMenu::Closed
        }
    }
}
