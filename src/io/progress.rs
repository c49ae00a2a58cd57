//! Turn-loop progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TURN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Turns: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a bounded run of turns
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the planned turn count
    pub fn new(total_turns: usize) -> Self {
        let bar = ProgressBar::new(total_turns as u64);
        bar.set_style(TURN_STYLE.clone());
        Self { bar }
    }

    /// Report the completed turn and the current population
    pub fn update(&self, completed_turns: usize, living_cells: u32) {
        self.bar.set_position(completed_turns as u64);
        self.bar.set_message(format!("{living_cells} alive"));
    }

    /// Close the bar with a final status message
    pub fn finish(&self, status: &str) {
        self.bar.finish_with_message(status.to_string());
    }
}
