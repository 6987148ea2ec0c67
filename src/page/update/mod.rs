mod affordances;
mod core;
mod navigation;
mod reveal;
mod scroll;
mod typing;

/// Element an effect applies to. Indexed targets refer to the order in which
/// the DOM adapter reported them in `PageInventory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Navbar,
    ScrollTopButton,
    MenuCollapse,
    HeroHeading,
    NavLink(usize),
    ProgressBar(usize),
    FadeIn(usize),
    Image(usize),
    Badge(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// Describes DOM work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetClass {
        target: Target,
        class: String,
        enabled: bool,
    },
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    SetText {
        target: Target,
        text: String,
    },
    InjectStyleRule(String),
    ScrollTo {
        top: f64,
        mode: ScrollMode,
    },
    /// Cancel the browser default for the event being handled.
    PreventDefault,
    ScheduleTypingTick {
        delay_ms: u32,
    },
    ShowAlert(String),
    ResetForm(usize),
}
