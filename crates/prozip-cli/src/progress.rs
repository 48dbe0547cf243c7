//! Progress display for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use prozip_core::ProgressReporter;
use std::time::Duration;

/// CLI spinner implementing the core's `ProgressReporter`.
///
/// The total entry count is unknown before the walk finishes, so the
/// display is a spinner with a running entry counter and the current
/// entry name. Cleans up automatically on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a new spinner with the given message prefix.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix} {pos} entries | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Checks if a progress display should be shown (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    /// Stops the spinner and clears the line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn report(&self, text: &str) {
        self.bar.inc(1);
        self.bar.set_message(text.to_string());
    }
}
