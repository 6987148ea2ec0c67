/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Extent { top, height }
    }

    /// Half-open containment: `top <= position < top + height`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Geometry read from the DOM at the moment of a scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset_y: f64,
    pub viewport_height: f64,
    /// One extent per registered section, in registration order.
    pub section_extents: Vec<Extent>,
    /// Bounding-box top of each registered progress bar, relative to the viewport.
    pub progress_bar_tops: Vec<f64>,
}

/// Outbound contact links whose clicks are only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChannel {
    Email,
    WhatsApp,
    Social,
}

/// Events delivered to the page controller by the DOM adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Scrolled(ScrollSnapshot),
    AnchorActivated {
        href: String,
        /// `offsetTop` of the fragment target, when one exists.
        target_top: Option<f64>,
        menu_open: bool,
    },
    ScrollTopClicked,
    DocumentClicked {
        /// Click landed inside the collapse container or its toggle control.
        inside_menu: bool,
        menu_open: bool,
    },
    Intersected {
        index: usize,
        is_intersecting: bool,
    },
    /// The intersection watcher could not be created after fade-ins were hidden.
    RevealUnavailable,
    TypingTick,
    FormSubmitted {
        index: usize,
    },
    ImageFailed {
        index: usize,
        src: String,
    },
    BadgeHovered {
        index: usize,
        entered: bool,
    },
    LinkClicked {
        channel: LinkChannel,
        label: Option<String>,
    },
    Loaded {
        load_time_ms: Option<f64>,
    },
}
