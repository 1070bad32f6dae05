//! `TerminalReporter`: Presentation-layer implementation of the
//! `ProgressReporter` and `ScanProgress` ports.
//!
//! Wraps `&OutputContext` so application services can emit notices and scan
//! progress without depending on any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;

use crate::application::ports::{ProgressReporter, ScanProgress};
use crate::output::{OutputContext, progress};

/// Message shown next to the scan progress bar.
pub const SCAN_MESSAGE: &str = "Scanning VM status...";

/// Terminal reporter that wraps an `OutputContext`.
///
/// Holds the live progress bar between `begin` and `finish`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    bar: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            bar: RefCell::new(None),
        }
    }
}

impl TerminalReporter<'_> {
    /// Print around the live progress bar, if any, so lines do not tear it.
    fn print(&self, f: impl FnOnce()) {
        match self.bar.borrow().as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn info(&self, message: &str) {
        self.print(|| self.ctx.info(message));
    }

    fn success(&self, message: &str) {
        self.print(|| self.ctx.success(message));
    }

    fn warn(&self, message: &str) {
        self.print(|| self.ctx.warn(message));
    }

    fn error(&self, message: &str) {
        self.print(|| self.ctx.error(message));
    }
}

impl ScanProgress for TerminalReporter<'_> {
    fn begin(&self, total: usize) {
        let pb = progress::scan_bar(total as u64, SCAN_MESSAGE, self.ctx.show_progress());
        *self.bar.borrow_mut() = Some(pb);
    }

    fn advance(&self, completed: usize, _total: usize) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_position(completed as u64);
        }
    }

    fn finish(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}
