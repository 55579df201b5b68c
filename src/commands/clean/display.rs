//! Display and formatting utilities for clean command output.

use super::types::CleanupPlan;
use crate::commands::scan::{render_tier, tier_heading};
use cleansweep::entry::{Tier, abbreviate_home};
use cleansweep::remove::RemovalReport;
use std::fmt::Write;
use std::path::Path;

/// Print the cleanup plan in a readable format.
pub fn print_cleanup_plan(plan: &CleanupPlan, home: &Path, display_limit: usize) {
    print!("{}", render_cleanup_plan(plan, home, display_limit));
}

pub fn render_cleanup_plan(plan: &CleanupPlan, home: &Path, display_limit: usize) -> String {
    let mut out = String::from("Cleanup plan:\n\n");

    if !plan.safe.is_empty() {
        out.push_str(&render_tier(tier_heading(Tier::Safe), &plan.safe, display_limit, home));
        out.push('\n');
    }
    if !plan.risky.is_empty() {
        out.push_str(&render_tier(tier_heading(Tier::Risky), &plan.risky, display_limit, home));
        out.push('\n');
    }
    if plan.risky_excluded > 0 {
        let _ = writeln!(
            out,
            "{} risky item(s) left alone; pass --include-risky to delete them too.",
            plan.risky_excluded
        );
        out.push('\n');
    }
    let _ = writeln!(out, "Selected: {} item(s)", plan.total());
    out
}

/// Warning shown before risky entries are deleted.
pub fn risky_warning(count: usize) -> String {
    format!(
        "WARNING: {} risky item(s) selected. These look like source code or \
         configuration and cannot be recovered once deleted.",
        count
    )
}

/// Render the removal summary with every skipped entry and its reason.
pub fn render_removal_report(report: &RemovalReport, home: &Path) -> String {
    let mut out = String::from("Cleanup complete:\n");
    let _ = writeln!(out, "  Removed: {} item(s)", report.removed_count());
    if report.skipped_count() > 0 {
        let _ = writeln!(out, "  Skipped: {} item(s)", report.skipped_count());
        for (entry, reason) in report.skipped() {
            let _ = writeln!(out, "    - {}: {}", abbreviate_home(entry.path(), home), reason);
        }
    }
    out
}
