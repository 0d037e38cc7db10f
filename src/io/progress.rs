//! Terminal spinner tracking search depth and node count

use crate::io::configuration::{PROGRESS_REFRESH_NODES, PROGRESS_TICK_MS};
use crate::io::error::Result;
use crate::search::SearchStats;
use crate::search::observer::SearchObserver;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner on stderr showing how deep the search currently is
///
/// Redrawn every [`PROGRESS_REFRESH_NODES`] nodes so the hot loop stays cheap.
pub struct SearchProgress {
    bar: ProgressBar,
    cell_count: usize,
}

impl SearchProgress {
    /// Spinner for a board of `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), cell_count)
    }

    /// Spinner that tracks state without drawing anything
    pub fn hidden(cell_count: usize) -> Self {
        Self::with_bar(
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
            cell_count,
        )
    }

    fn with_bar(bar: ProgressBar, cell_count: usize) -> Self {
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        bar.set_message(format!("depth 0/{cell_count}"));
        Self { bar, cell_count }
    }

    /// Text currently shown next to the spinner
    pub fn message(&self) -> String {
        self.bar.message()
    }

    fn describe(&self, depth: usize, stats: &SearchStats) -> String {
        format!(
            "depth {depth:>2}/{} deepest {:>2} nodes {}",
            self.cell_count, stats.deepest, stats.nodes
        )
    }
}

impl SearchObserver for SearchProgress {
    fn enter(&mut self, depth: usize, stats: &SearchStats) -> Result<()> {
        if stats.nodes % PROGRESS_REFRESH_NODES == 1 || depth == self.cell_count {
            self.bar.set_message(self.describe(depth, stats));
        }
        Ok(())
    }

    fn finish(&mut self, stats: &SearchStats) {
        self.bar.set_message(self.describe(stats.deepest, stats));
        self.bar.finish_and_clear();
    }
}
