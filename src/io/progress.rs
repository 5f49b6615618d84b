//! Batch progress display for shape file processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Single progress bar advancing once per processed file
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden bar; it becomes visible on [`Self::initialize`]
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the bar for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let template = format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        self.bar = ProgressBar::new(file_count as u64);
        self.bar.set_style(style);
    }

    /// Record the file currently being processed
    pub fn start_file(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(name);
    }

    /// Advance past a finished file
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of files completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All shapes processed");
    }
}
