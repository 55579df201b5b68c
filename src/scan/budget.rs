//! The item budget shared by both scan passes.

/// Global cap on the number of classified entries a single scan may record.
///
/// One budget is created per scan and passed by `&mut` through the top-down
/// and bottom-up passes, so both draw from the same allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanBudget {
    limit: usize,
    used: usize,
}

impl ScanBudget {
    /// A budget allowing `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    /// Total allowance.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries recorded so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Entries that may still be recorded.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }

    /// Whether no further entries may be recorded.
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Count one recorded entry. Callers check [`is_exhausted`](Self::is_exhausted) first.
    pub(crate) fn charge(&mut self) {
        self.used += 1;
    }
}
