//! Bottom-up pass: report directories that have no children.

use super::{Collector, Pass, ScanStop};
use crate::entry::Tier;
use crate::fs::is_empty_dir;
use std::path::Path;
use walkdir::WalkDir;

/// Walk everything under `root` children-first and record empty directories.
///
/// Hidden directories are included here, and so is the root: an empty root
/// is reported like any other empty directory.
/// Symlinks are not followed, so a link to a directory is never "empty".
pub(super) fn bottom_up(root: &Path, collector: &mut Collector<'_>) -> Pass {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .contents_first(true);

    for item in walker {
        collector.ensure_budget()?;

        let entry = item.map_err(|e| ScanStop::Fault {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let empty = is_empty_dir(entry.path()).map_err(|e| ScanStop::Fault {
            path: entry.path().to_path_buf(),
            reason: e.to_string(),
        })?;

        if empty {
            collector.record(Tier::Safe, entry.path())?;
        }
    }

    Ok(())
}
