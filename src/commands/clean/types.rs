//! Data types for the clean command.

use cleansweep::entry::Entry;

/// Entries selected for deletion, per tier.
#[derive(Debug, Default)]
pub struct CleanupPlan {
    /// Safe entries (always selected).
    pub safe: Vec<Entry>,
    /// Risky entries (selected only with `--include-risky`).
    pub risky: Vec<Entry>,
    /// Risky entries found but left out of the plan.
    pub risky_excluded: usize,
}

impl CleanupPlan {
    /// Number of entries that will be deleted.
    pub fn total(&self) -> usize {
        self.safe.len() + self.risky.len()
    }

    /// Whether there is nothing to delete.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every selected entry, Safe first.
    pub fn entries(&self) -> Vec<Entry> {
        self.safe.iter().chain(&self.risky).cloned().collect()
    }
}
