use std::sync::atomic::{AtomicUsize, Ordering};
use crate::config::constants::PROGRESS_BAR_WIDTH;

/// Thread-safe progress display for the worker pool. The counter feeds
/// the display only; control decisions come from the collected dispatch
/// results, never from here.
pub struct ProgressLogger {
    total: usize,
    done: AtomicUsize,
}

impl ProgressLogger {
    pub fn new(total: usize) -> Self {
        Self { total, done: AtomicUsize::new(0) }
    }

    pub fn completed(&self, project_id: &str) {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!(
            "Progress: [{}] {}/{} ({:.1}%) - ✓ Completed: {}",
            self.bar(done),
            done,
            self.total,
            self.percent(done),
            project_id
        );
    }

    pub fn skipped(&self, project_id: &str, reason: &str) {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        log::warn!(
            "Progress: [{}] {}/{} ({:.1}%) - ✗ Skipped: {} ({})",
            self.bar(done),
            done,
            self.total,
            self.percent(done),
            project_id,
            reason
        );
    }

    fn percent(&self, done: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            done as f64 / self.total as f64 * 100.0
        }
    }

    fn bar(&self, done: usize) -> String {
        let filled = if self.total == 0 { 0 } else { PROGRESS_BAR_WIDTH * done / self.total };
        let filled = filled.min(PROGRESS_BAR_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
    }
}
