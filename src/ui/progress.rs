//! Progress reporting

use crate::types::{OrganizeEvent, OrganizeStats};
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::cell::Cell;

/// Progress reporter for organize runs
///
/// Renders a spinner while files land in their buckets and prints one
/// warning line per skipped entry, above the spinner so nothing is lost.
pub struct ProgressReporter {
    bar: ProgressBar,
    files: Cell<u64>,
    bytes: Cell<u64>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        Self {
            bar,
            files: Cell::new(0),
            bytes: Cell::new(0),
        }
    }

    /// Render a single walk event.
    pub fn handle(&self, event: &OrganizeEvent) {
        match event {
            OrganizeEvent::FileCopied { bytes, .. } => {
                self.files.set(self.files.get() + 1);
                self.bytes.set(self.bytes.get() + bytes);
                self.bar.set_message(format!(
                    "Organizing... {} files | {}",
                    self.files.get(),
                    HumanBytes(self.bytes.get())
                ));
            }
            OrganizeEvent::EntryUnreadable { path, kind, error } => {
                self.warn(format!(
                    "cannot read {} '{}': {}",
                    kind.label(),
                    path.display(),
                    error
                ));
            }
            OrganizeEvent::BucketFailed { error } | OrganizeEvent::CopyFailed { error } => {
                self.warn(error.to_string());
            }
        }
    }

    /// Print the final summary and stop the spinner.
    pub fn finish(&self, stats: &OrganizeStats) {
        let mut summary = format!(
            "Organized {} files | {}",
            stats.files_copied,
            HumanBytes(stats.bytes_copied)
        );
        if !stats.is_clean() {
            summary.push_str(&format!(
                " | skipped: {} unreadable, {} copy failures, {} bucket failures",
                stats.entries_skipped, stats.copy_failures, stats.bucket_failures
            ));
        }
        self.bar.finish_with_message(summary);
    }

    fn warn(&self, message: String) {
        self.bar.println(format!(
            "{} {}",
            console::style("warning:").yellow().bold(),
            message
        ));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
