//! The result display area.
//!
//! Responses are shown in the order they arrive. A second submission does
//! not cancel the first; whichever answer lands last is what stays visible.

use sg_solver::ResultView;

/// Holds the most recently rendered solver result.
#[derive(Debug, Clone, Default)]
pub struct ResultBoard {
    current: Option<ResultView>,
    received: usize,
}

impl ResultBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown with a newly arrived result.
    pub fn show(&mut self, view: ResultView) -> &ResultView {
        self.received += 1;
        if self.current.is_some() {
            log::debug!("result #{} replaces the previous one", self.received);
        }
        self.current.insert(view)
    }

    /// The result on display, if any has arrived.
    pub fn current(&self) -> Option<&ResultView> {
        self.current.as_ref()
    }

    /// Number of results received so far.
    pub fn received(&self) -> usize {
        self.received
    }
}
