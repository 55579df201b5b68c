//! Implementation of the `cleansweep clean` command.
//!
//! Scans the root, selects entries, and deletes them:
//! - Safe entries are always selected
//! - Risky entries only with `--include-risky`
//!
//! # Safety
//!
//! - Default behavior is dry-run (prints what would be removed)
//! - Requires `--yes` to actually perform deletions
//! - Prints a warning with the risky count before deleting risky entries
//! - Never deletes recursively: non-empty directories are skipped
//!
//! After deleting, the root is scanned again with the same limits and the
//! remaining count is reported.

mod display;
mod execution;
mod planning;
mod types;


use crate::cli::CleanArgs;
use cleansweep::config::Config;
use cleansweep::context::ScanContext;
use cleansweep::error::Result;
use cleansweep::scan::scan;

use display::{print_cleanup_plan, render_removal_report, risky_warning};
use execution::execute_cleanup;
use planning::build_cleanup_plan;

/// Execute the `cleansweep clean` command.
///
/// # Behavior
///
/// - Without `--yes`: dry-run mode, prints what would be removed
/// - With `--yes`: performs actual deletions, then re-scans
/// - `--include-risky`: also select Risky entries
pub fn cmd_clean(config: &Config, args: CleanArgs) -> Result<()> {
    let config = config.clone().with_overrides(args.root, args.max_items)?;
    let ctx = ScanContext::resolve(&config)?;

    let result = scan(&ctx.root, config.max_items);
    let plan = build_cleanup_plan(result, args.include_risky);

    if plan.is_empty() {
        println!("No cleanup candidates found.");
        if plan.risky_excluded > 0 {
            println!(
                "{} risky item(s) found; pass --include-risky to select them.",
                plan.risky_excluded
            );
        }
        return Ok(());
    }

    print_cleanup_plan(&plan, &ctx.home, config.display_limit);

    if !plan.risky.is_empty() {
        println!();
        println!("{}", risky_warning(plan.risky.len()));
    }

    // If dry-run (no --yes), just exit
    if !args.yes {
        println!();
        println!("Dry-run mode: no changes made.");
        println!("Run with --yes to perform the cleanup.");
        return Ok(());
    }

    println!();
    let report = execute_cleanup(&plan, &ctx.home);
    tracing::info!(
        removed = report.removed_count(),
        skipped = report.skipped_count(),
        "cleanup finished"
    );

    println!();
    print!("{}", render_removal_report(&report, &ctx.home));

    let remaining = scan(&ctx.root, config.max_items);
    println!();
    println!(
        "Rescan: {} item(s) remaining ({} safe, {} risky)",
        remaining.total(),
        remaining.safe.len(),
        remaining.risky.len()
    );

    Ok(())
}
