/// One registered progress bar. `target` is `None` when its declaration
/// could not be parsed; such bars are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    pub(in crate::page) target: Option<u8>,
    pub(in crate::page) revealed: bool,
}

impl ProgressBar {
    pub(in crate::page) fn is_pending(&self) -> bool {
        self.target.is_some() && !self.revealed
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealState {
    pub(in crate::page) bars: Vec<ProgressBar>,
    /// One-way hidden→visible flag per fade-in element.
    pub(in crate::page) faded_in: Vec<bool>,
    /// False when the browser cannot watch intersections; elements were
    /// never hidden in that case.
    pub(in crate::page) animated: bool,
}

impl RevealState {
    pub(in crate::page) fn pending_bars(&self) -> usize {
        self.bars.iter().filter(|bar| bar.is_pending()).count()
    }
}
