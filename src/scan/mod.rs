//! Bounded scan of a directory tree for disposable and risky entries.
//!
//! A scan is two passes over the same root sharing one [`ScanBudget`]:
//!
//! 1. **Top-down** (`walk`): each directory is listed once; its files are
//!    classified, then its subdirectories, then the scan descends into the
//!    subdirectories in listing order. Dot-directories are skipped unless they
//!    are in the Safe-directory set.
//! 2. **Bottom-up** (`empty_dirs`): every directory under the root that has no
//!    children at all is reported Safe. Runs only if pass 1 left budget over.
//!
//! The scan stops the moment the budget is used up. Any error while listing a
//! directory also ends the whole scan; what was collected so far is returned
//! and the fault is only logged. Callers of [`scan`] cannot tell a finished
//! scan from an aborted one; [`Scanner::run`] exposes the difference for
//! diagnostics.

mod budget;
mod empty_dirs;
mod walk;


pub use budget::ScanBudget;

use crate::classify::Classifier;
use crate::entry::{Entry, Tier};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default item budget for a scan.
pub const DEFAULT_MAX_ITEMS: usize = 150;

/// Entries found by one scan, per tier, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Disposable entries.
    pub safe: Vec<Entry>,
    /// Entries that look like source or configuration.
    pub risky: Vec<Entry>,
}

impl ScanResult {
    /// Entries in one tier.
    pub fn tier(&self, tier: Tier) -> &[Entry] {
        match tier {
            Tier::Safe => &self.safe,
            Tier::Risky => &self.risky,
        }
    }

    /// Total entries across both tiers.
    pub fn total(&self) -> usize {
        self.safe.len() + self.risky.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, tier: Tier, entry: Entry) {
        match tier {
            Tier::Safe => self.safe.push(entry),
            Tier::Risky => self.risky.push(entry),
        }
    }
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Both passes visited everything they were meant to.
    Completed,
    /// The item budget ran out.
    BudgetExhausted,
    /// Listing a directory failed; the scan stopped there.
    Aborted {
        /// Directory being listed when the fault occurred.
        path: PathBuf,
        /// OS error description.
        reason: String,
    },
}

/// A scan result together with how the scan ended.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Entries collected before the scan ended.
    pub result: ScanResult,
    /// Why the scan ended.
    pub outcome: ScanOutcome,
    /// The budget as the scan left it.
    pub budget: ScanBudget,
}

/// Reason a pass stopped before visiting everything.
#[derive(Debug)]
enum ScanStop {
    BudgetExhausted,
    Fault { path: PathBuf, reason: String },
}

type Pass = Result<(), ScanStop>;

/// State threaded through both passes: the budget and what has been found.
struct Collector<'a> {
    classifier: &'a Classifier,
    budget: ScanBudget,
    result: ScanResult,
    recorded: HashSet<PathBuf>,
}

impl<'a> Collector<'a> {
    fn new(classifier: &'a Classifier, budget: ScanBudget) -> Self {
        Self {
            classifier,
            budget,
            result: ScanResult::default(),
            recorded: HashSet::new(),
        }
    }

    /// Fail fast when the budget is already gone.
    fn ensure_budget(&self) -> Pass {
        if self.budget.is_exhausted() {
            Err(ScanStop::BudgetExhausted)
        } else {
            Ok(())
        }
    }

    /// Classify a listed entry and record it when it matches.
    fn offer(&mut self, path: &Path, name: &str, is_dir: bool) -> Pass {
        self.ensure_budget()?;
        match self.classifier.classify(name, is_dir) {
            Some(tier) => self.record(tier, path),
            None => Ok(()),
        }
    }

    /// Record an entry, charging the budget. Already-recorded paths are ignored.
    fn record(&mut self, tier: Tier, path: &Path) -> Pass {
        self.ensure_budget()?;
        if !self.recorded.insert(path.to_path_buf()) {
            return Ok(());
        }

        tracing::trace!(path = %path.display(), %tier, "classified");
        self.result.push(tier, Entry::new(path));
        self.budget.charge();
        self.ensure_budget()
    }

    fn is_safe_dir(&self, name: &str) -> bool {
        self.classifier.is_safe_dir(name)
    }
}

/// Scanner bound to a specific classifier.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    classifier: &'a Classifier,
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Self::new(Classifier::standard())
    }
}

impl<'a> Scanner<'a> {
    /// Scanner using the given classification rules.
    pub fn new(classifier: &'a Classifier) -> Self {
        Self { classifier }
    }

    /// Scan `root`, recording at most `max_items` entries.
    pub fn scan(&self, root: &Path, max_items: usize) -> ScanResult {
        self.run(root, max_items).result
    }

    /// Scan `root` and report how the scan ended.
    pub fn run(&self, root: &Path, max_items: usize) -> ScanReport {
        let mut collector = Collector::new(self.classifier, ScanBudget::new(max_items));

        let stop = walk::top_down(root, &mut collector)
            .and_then(|()| empty_dirs::bottom_up(root, &mut collector))
            .err();

        let outcome = match stop {
            None => ScanOutcome::Completed,
            Some(ScanStop::BudgetExhausted) => {
                tracing::debug!(limit = max_items, "scan budget exhausted");
                ScanOutcome::BudgetExhausted
            }
            Some(ScanStop::Fault { path, reason }) => {
                tracing::debug!(path = %path.display(), %reason, "scan aborted by listing fault");
                ScanOutcome::Aborted { path, reason }
            }
        };

        tracing::debug!(
            root = %root.display(),
            safe = collector.result.safe.len(),
            risky = collector.result.risky.len(),
            remaining = collector.budget.remaining(),
            "scan finished"
        );

        ScanReport {
            result: collector.result,
            outcome,
            budget: collector.budget,
        }
    }
}

/// Scan `root` with the built-in rules, recording at most `max_items` entries.
pub fn scan(root: &Path, max_items: usize) -> ScanResult {
    Scanner::default().scan(root, max_items)
}
