//! Attempt progress display for interactive runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} attempts")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generation attempts against the configured cap
///
/// Regeneration is a normal part of operation, so the bar reports attempts
/// and absorbed backtracks rather than treating retries as failures.
pub struct AttemptProgress {
    bar: ProgressBar,
}

impl AttemptProgress {
    /// Create a progress bar sized to the attempt cap
    pub fn new(max_attempts: usize) -> Self {
        let bar = ProgressBar::new(max_attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        bar.set_message("solving");
        Self { bar }
    }

    /// Report the start of an attempt and the backtracks spent so far
    pub fn update(&self, attempt: usize, backtracks: usize) {
        self.bar.set_position(attempt as u64);
        self.bar.set_message(format!("solving ({backtracks} backtracks)"));
    }

    /// Close out the display after a solved grid
    pub fn finish_solved(&self, attempts: usize) {
        self.bar
            .finish_with_message(format!("solved in {attempts} attempts"));
    }

    /// Close out the display after exhausting the attempt cap
    pub fn finish_failed(&self) {
        self.bar.finish_with_message("generation failed");
    }
}
