//! Implementation of the `cleansweep scan` command.
//!
//! Runs one bounded scan and prints what it found, tier by tier. Nothing is
//! modified.

use crate::cli::{ScanArgs, TierFilter};
use cleansweep::config::Config;
use cleansweep::context::ScanContext;
use cleansweep::entry::{Entry, Tier};
use cleansweep::error::{CleanSweepError, Result};
use cleansweep::scan::{ScanBudget, ScanOutcome, ScanReport, ScanResult, Scanner};
use std::fmt::Write;
use std::path::Path;

/// Execute the `cleansweep scan` command.
pub fn cmd_scan(config: &Config, args: ScanArgs) -> Result<()> {
    let config = config.clone().with_overrides(args.root, args.max_items)?;
    let ctx = ScanContext::resolve(&config)?;

    let report = Scanner::default().run(&ctx.root, config.max_items);
    let result = select_tiers(report.result.clone(), args.tier);

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            CleanSweepError::UserError(format!("failed to serialize scan result: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", scan_heading(&ctx));
    println!();
    print!(
        "{}",
        render_result(&result, config.display_limit, &ctx.home)
    );
    println!("{}", budget_line(&report.budget));
    if let Some(note) = outcome_note(&report) {
        println!();
        println!("{}", note);
    }

    Ok(())
}

/// First line of output: where the scan starts.
pub(super) fn scan_heading(ctx: &ScanContext) -> String {
    if ctx.is_home_scan() {
        format!("Scanning home directory {}", ctx.root.display())
    } else {
        format!(
            "Scanning {} (outside the default home scan)",
            ctx.root.display()
        )
    }
}

/// How much of the item budget the scan consumed.
pub(super) fn budget_line(budget: &ScanBudget) -> String {
    format!(
        "Budget: {} of {} item(s) used, {} left",
        budget.used(),
        budget.limit(),
        budget.remaining()
    )
}

/// Drop the tiers the user did not ask for.
pub(super) fn select_tiers(mut result: ScanResult, filter: TierFilter) -> ScanResult {
    match filter {
        TierFilter::Safe => result.risky.clear(),
        TierFilter::Risky => result.safe.clear(),
        TierFilter::All => {}
    }
    result
}

/// Heading shown above each tier.
pub(super) fn tier_heading(tier: Tier) -> &'static str {
    match tier {
        Tier::Safe => "Safe to delete (caches, logs, temp files, empty folders)",
        Tier::Risky => "Risky (source and config files, review before deleting)",
    }
}

/// Render every non-empty tier and the summary line.
pub(super) fn render_result(result: &ScanResult, display_limit: usize, home: &Path) -> String {
    let mut out = String::new();

    for tier in [Tier::Safe, Tier::Risky] {
        let entries = result.tier(tier);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&render_tier(tier_heading(tier), entries, display_limit, home));
        out.push('\n');
    }

    if result.is_empty() {
        out.push_str("Nothing to clean up.\n");
    } else {
        let _ = writeln!(out, "Found: {} item(s)", result.total());
    }
    out
}

/// Render one tier: a header with the shown/total counts, at most
/// `display_limit` entries, then a note for anything cut off.
pub(super) fn render_tier(
    heading: &str,
    entries: &[Entry],
    display_limit: usize,
    home: &Path,
) -> String {
    let shown = entries.len().min(display_limit);
    let mut out = String::new();

    let _ = writeln!(out, "{}:", heading);
    let _ = writeln!(out, "Showing {} of {}", shown, entries.len());

    let width = entries[..shown]
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0);
    for entry in &entries[..shown] {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            entry.name(),
            entry.parent_display_path(home),
            width = width
        );
    }

    if entries.len() > shown {
        let _ = writeln!(out, "  ... {} more not shown", entries.len() - shown);
    }
    out
}

/// Explain a scan that did not visit everything.
pub(super) fn outcome_note(report: &ScanReport) -> Option<String> {
    match &report.outcome {
        ScanOutcome::Completed => None,
        ScanOutcome::BudgetExhausted => Some(format!(
            "Note: stopped after {} item(s); raise --max-items to look further.",
            report.budget.limit()
        )),
        ScanOutcome::Aborted { path, reason } => Some(format!(
            "Note: scan stopped early at {} ({}); results are partial.",
            path.display(),
            reason
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(paths: &[&str]) -> Vec<Entry> {
        paths.iter().map(|p| Entry::new(PathBuf::from(p))).collect()
    }

    #[test]
    fn select_tiers_filters() {
        let result = ScanResult {
            safe: entries(&["/h/a.log"]),
            risky: entries(&["/h/b.py"]),
        };

        let safe_only = select_tiers(result.clone(), TierFilter::Safe);
        assert_eq!(safe_only.safe.len(), 1);
        assert!(safe_only.risky.is_empty());

        let risky_only = select_tiers(result.clone(), TierFilter::Risky);
        assert!(risky_only.safe.is_empty());
        assert_eq!(risky_only.risky.len(), 1);

        assert_eq!(select_tiers(result.clone(), TierFilter::All), result);
    }

    #[test]
    fn render_tier_truncates_to_display_limit() {
        let home = Path::new("/home/user");
        let list = entries(&[
            "/home/user/a.log",
            "/home/user/cache/b.tmp",
            "/home/user/c.bak",
        ]);

        let out = render_tier("Safe", &list, 2, home);

        assert!(out.contains("Showing 2 of 3"));
        assert!(out.contains("a.log"));
        assert!(out.contains("b.tmp"));
        assert!(!out.contains("c.bak"));
        assert!(out.contains("... 1 more not shown"));
    }

    #[test]
    fn render_tier_shows_abbreviated_parent() {
        let home = Path::new("/home/user");
        let list = entries(&["/home/user/proj/debug.log", "/home/user/x.tmp"]);

        let out = render_tier("Safe", &list, 10, home);

        assert!(out.contains("Showing 2 of 2"));
        assert!(out.contains(&format!("~{}proj", std::path::MAIN_SEPARATOR)));
        assert!(out.lines().any(|l| l.trim_end().ends_with('~')));
        assert!(!out.contains("more not shown"));
    }

    #[test]
    fn render_result_summarizes_total() {
        let home = Path::new("/home/user");
        let result = ScanResult {
            safe: entries(&["/home/user/a.log", "/home/user/b.tmp"]),
            risky: entries(&["/home/user/main.py"]),
        };

        let out = render_result(&result, 100, home);

        assert!(out.contains(tier_heading(Tier::Safe)));
        assert!(out.contains(tier_heading(Tier::Risky)));
        assert!(out.ends_with("Found: 3 item(s)\n"));
    }

    #[test]
    fn render_result_skips_empty_tiers() {
        let home = Path::new("/home/user");
        let result = ScanResult {
            safe: entries(&["/home/user/a.log"]),
            risky: vec![],
        };

        let out = render_result(&result, 100, home);

        assert!(!out.contains(tier_heading(Tier::Risky)));
    }

    #[test]
    fn render_result_reports_nothing_found() {
        let out = render_result(&ScanResult::default(), 100, Path::new("/home/user"));
        assert_eq!(out, "Nothing to clean up.\n");
    }

    #[test]
    fn outcome_note_only_for_partial_scans() {
        let report = |outcome| ScanReport {
            result: ScanResult::default(),
            outcome,
            budget: ScanBudget::new(150),
        };

        assert!(outcome_note(&report(ScanOutcome::Completed)).is_none());
        assert!(
            outcome_note(&report(ScanOutcome::BudgetExhausted))
                .unwrap()
                .contains("150")
        );
        let aborted = ScanOutcome::Aborted {
            path: PathBuf::from("/home/user/locked"),
            reason: "permission denied".to_string(),
        };
        assert!(
            outcome_note(&report(aborted))
                .unwrap()
                .contains("permission denied")
        );
    }

    #[test]
    fn heading_distinguishes_home_scan() {
        let home = PathBuf::from("/home/user");
        let home_ctx = ScanContext {
            home: home.clone(),
            root: home.clone(),
        };
        let other_ctx = ScanContext {
            home,
            root: PathBuf::from("/srv/data"),
        };

        assert!(scan_heading(&home_ctx).starts_with("Scanning home directory"));
        assert!(scan_heading(&other_ctx).contains("outside the default home scan"));
    }

    #[test]
    fn budget_line_reports_usage_from_a_real_scan() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.log"), b"").unwrap();
        std::fs::write(temp.path().join("b.tmp"), b"").unwrap();

        let report = Scanner::default().run(temp.path(), 5);

        assert_eq!(budget_line(&report.budget), "Budget: 2 of 5 item(s) used, 3 left");
    }
}
