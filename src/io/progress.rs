//! Progress display for in-flight generation runs
//!
//! Tracks collapsed cells against the grid total and resets to zero whenever
//! a contradiction forces a fresh attempt, keeping the attempt count visible
//! in the bar prefix.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-run progress bar over the cells of one grid
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a bar for a run over `total_cells` cells
    pub fn new(run_label: &str, total_cells: u64) -> Self {
        let bar = ProgressBar::new(total_cells);
        bar.set_style(RUN_STYLE.clone());
        bar.set_prefix(run_label.to_string());
        Self { bar }
    }

    /// Report the number of collapsed cells
    pub fn update(&self, collapsed: usize) {
        self.bar.set_position(collapsed as u64);
    }

    /// Report a restart, rewinding the bar to zero
    pub fn restart(&self, attempt: usize) {
        self.bar.set_position(0);
        self.bar.set_message(format!("(attempt {attempt})"));
    }

    /// Complete the bar and clear it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Print a line above the bar without disturbing it
    pub fn println(&self, message: &str) {
        self.bar.println(message);
    }
}
