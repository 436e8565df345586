//! Progress display for batch rendering

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static ITEM_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:>10} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks rendering progress across a batch of layouts
///
/// Small batches get one line per layout; larger ones collapse into a single
/// batch bar to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    item_bars: Vec<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            item_bars: Vec::new(),
            completed: 0,
        }
    }

    /// Create bars for a batch of `count` layouts
    pub fn initialize(&mut self, count: usize) {
        if count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..count {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ITEM_STYLE.clone());
            self.item_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Show that a layout has started rendering
    pub fn start_item(&self, index: usize, name: &str) {
        if let Some(bar) = self.item_bars.get(index) {
            bar.set_prefix(name.to_string());
            bar.set_message("rendering");
            bar.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// Mark a layout as finished, with a short status message
    pub fn complete_item(&mut self, index: usize, status: &str) {
        self.completed += 1;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.item_bars.get(index) {
            bar.finish_with_message(format!("✓ {status}"));
        }
    }

    /// Number of layouts completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All layouts rendered");
        }
        let _ = self.multi_progress.clear();
    }
}
