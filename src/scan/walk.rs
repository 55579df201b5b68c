//! Top-down pass: classify files, then subdirectories, then descend.

use super::{Collector, Pass, ScanStop};
use crate::fs::{ListedKind, listed_kind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One directory's children, split the way the pass consumes them.
#[derive(Debug, Default)]
struct Listing {
    files: Vec<(PathBuf, String)>,
    dirs: Vec<ListedDir>,
}

#[derive(Debug)]
struct ListedDir {
    path: PathBuf,
    name: String,
    descend: bool,
}

/// Walk `root` depth-first, pre-order, in listing order.
pub(super) fn top_down(root: &Path, collector: &mut Collector<'_>) -> Pass {
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let listing = list_dir(&dir, collector).map_err(|e| ScanStop::Fault {
            path: dir.clone(),
            reason: e.to_string(),
        })?;

        for (path, name) in &listing.files {
            collector.offer(path, name, false)?;
        }
        for sub in &listing.dirs {
            collector.offer(&sub.path, &sub.name, true)?;
        }

        // Reversed so the first listed subdirectory is popped first.
        pending.extend(
            listing
                .dirs
                .into_iter()
                .rev()
                .filter(|sub| sub.descend)
                .map(|sub| sub.path),
        );
    }

    Ok(())
}

/// List `dir`, dropping dot-directories other than Safe-directory names.
fn list_dir(dir: &Path, collector: &Collector<'_>) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let kind = listed_kind(&entry)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        match kind {
            ListedKind::File => listing.files.push((path, name)),
            ListedKind::Dir | ListedKind::DirLink => {
                if name.starts_with('.') && !collector.is_safe_dir(&name) {
                    continue;
                }
                listing.dirs.push(ListedDir {
                    path,
                    name,
                    descend: kind == ListedKind::Dir,
                });
            }
        }
    }

    Ok(listing)
}
