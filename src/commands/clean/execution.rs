//! Cleanup execution logic.

use super::types::CleanupPlan;
use cleansweep::entry::abbreviate_home;
use cleansweep::remove::{RemovalOutcome, RemovalReport, remove_all};
use std::path::Path;

/// Delete every entry in the plan, printing each removal as it happens.
///
/// Failures never stop the batch; they are collected in the report.
pub fn execute_cleanup(plan: &CleanupPlan, home: &Path) -> RemovalReport {
    let report = remove_all(&plan.entries());

    for (entry, outcome) in &report.outcomes {
        if *outcome == RemovalOutcome::Removed {
            println!("Removed: {}", abbreviate_home(entry.path(), home));
        }
    }

    report
}
