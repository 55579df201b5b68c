//! Cleanup plan building logic.

use super::types::CleanupPlan;
use cleansweep::scan::ScanResult;

/// Select entries from a scan: every Safe entry, and Risky ones only when
/// `include_risky` is set.
pub fn build_cleanup_plan(result: ScanResult, include_risky: bool) -> CleanupPlan {
    let ScanResult { safe, risky } = result;

    if include_risky {
        CleanupPlan {
            safe,
            risky,
            risky_excluded: 0,
        }
    } else {
        CleanupPlan {
            safe,
            risky_excluded: risky.len(),
            risky: Vec::new(),
        }
    }
}
