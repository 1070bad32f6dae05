//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create the scan progress bar: spinner, message, bar, and `pos/len`.
///
/// When `visible` is `false` the bar still counts but never draws.
///
/// # Panics
///
/// Panics if the template string is invalid (it is a compile-time constant and will not panic).
#[must_use]
pub fn scan_bar(len: u64, msg: &str, visible: bool) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(
        Some(len),
        if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        },
    );
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.cyan} {msg} {bar:40.cyan/dim} {pos}/{len}")
            .expect("valid template")
            .progress_chars("━━─"),
    );
    pb.set_message(msg.to_string());
    if visible {
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}
