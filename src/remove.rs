//! Best-effort removal of scanned entries.
//!
//! Each entry is handled on its own: files and symlinks are unlinked,
//! directories are removed only when empty. Nothing is ever deleted
//! recursively, and a failure on one entry never stops the batch.

use crate::entry::Entry;
use std::fs;
use std::io;

/// What happened to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The entry no longer exists.
    Removed,
    /// The entry was left untouched.
    Skipped(SkipReason),
}

/// Why an entry was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing exists at the path any more.
    NotFound,
    /// The directory still has contents.
    NotEmpty,
    /// The OS refused access.
    PermissionDenied,
    /// Neither a file, a symlink, nor a directory.
    UnsupportedType,
    /// Any other OS error.
    Other(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::NotEmpty => write!(f, "directory not empty"),
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::UnsupportedType => write!(f, "not a file or directory"),
            SkipReason::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SkipReason::NotFound,
            io::ErrorKind::DirectoryNotEmpty => SkipReason::NotEmpty,
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            _ => SkipReason::Other(err.to_string()),
        }
    }
}

/// Per-entry outcomes of a removal batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct RemovalReport {
    /// Each attempted entry with its outcome.
    pub outcomes: Vec<(Entry, RemovalOutcome)>,
}

impl RemovalReport {
    /// Number of entries actually removed.
    pub fn removed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == RemovalOutcome::Removed)
            .count()
    }

    /// Entries left in place, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&Entry, &SkipReason)> {
        self.outcomes.iter().filter_map(|(entry, outcome)| match outcome {
            RemovalOutcome::Skipped(reason) => Some((entry, reason)),
            RemovalOutcome::Removed => None,
        })
    }

    /// Number of entries left in place.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.removed_count()
    }
}

/// Remove one entry without recursing into directories.
pub fn remove_entry(entry: &Entry) -> RemovalOutcome {
    let path = entry.path();

    let result = fs::symlink_metadata(path).and_then(|meta| {
        let file_type = meta.file_type();
        if is_dir_link(&file_type) {
            fs::remove_dir(path).map(|()| RemovalOutcome::Removed)
        } else if file_type.is_file() || file_type.is_symlink() {
            fs::remove_file(path).map(|()| RemovalOutcome::Removed)
        } else if file_type.is_dir() {
            fs::remove_dir(path).map(|()| RemovalOutcome::Removed)
        } else {
            Ok(RemovalOutcome::Skipped(SkipReason::UnsupportedType))
        }
    });

    let outcome = result.unwrap_or_else(|e| RemovalOutcome::Skipped(e.into()));
    match &outcome {
        RemovalOutcome::Removed => tracing::debug!(path = %path.display(), "removed"),
        RemovalOutcome::Skipped(reason) => {
            tracing::debug!(path = %path.display(), %reason, "skipped")
        }
    }
    outcome
}

/// Windows directory links are removed with `remove_dir`; the link goes, the
/// target stays.
#[cfg(windows)]
fn is_dir_link(file_type: &fs::FileType) -> bool {
    use std::os::windows::fs::FileTypeExt;
    file_type.is_symlink_dir()
}

#[cfg(not(windows))]
fn is_dir_link(_file_type: &fs::FileType) -> bool {
    false
}

/// Attempt every entry and collect the outcomes.
pub fn remove_all(entries: &[Entry]) -> RemovalReport {
    RemovalReport {
        outcomes: entries
            .iter()
            .map(|entry| (entry.clone(), remove_entry(entry)))
            .collect(),
    }
}

/// Attempt every entry and return how many were removed.
pub fn delete_entries(entries: &[Entry]) -> usize {
    remove_all(entries).removed_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_tree;

    #[test]
    fn empty_batch_removes_nothing() {
        assert_eq!(delete_entries(&[]), 0);
        assert!(remove_all(&[]).outcomes.is_empty());
    }

    #[test]
    fn removes_files_and_empty_directories() {
        let temp = create_tree(&["a.tmp", "b.log", "emptydir/"]);
        let entries = vec![
            Entry::new(temp.path().join("a.tmp")),
            Entry::new(temp.path().join("b.log")),
            Entry::new(temp.path().join("emptydir")),
        ];

        assert_eq!(delete_entries(&entries), 3);
        for entry in &entries {
            assert!(!entry.path().exists());
        }
    }

    #[test]
    fn non_empty_directory_is_left_untouched() {
        let temp = create_tree(&["__pycache__/mod.pyc"]);
        let dir = Entry::new(temp.path().join("__pycache__"));

        let outcome = remove_entry(&dir);

        assert_eq!(outcome, RemovalOutcome::Skipped(SkipReason::NotEmpty));
        assert!(temp.path().join("__pycache__/mod.pyc").exists());
    }

    #[test]
    fn missing_entry_is_not_counted() {
        let temp = create_tree(&[]);
        let missing = Entry::new(temp.path().join("gone.log"));

        assert_eq!(remove_entry(&missing), RemovalOutcome::Skipped(SkipReason::NotFound));
        assert_eq!(delete_entries(&[missing]), 0);
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let temp = create_tree(&["first.log", "full/keep.txt", "last.log"]);
        let entries = vec![
            Entry::new(temp.path().join("first.log")),
            Entry::new(temp.path().join("missing.tmp")),
            Entry::new(temp.path().join("full")),
            Entry::new(temp.path().join("last.log")),
        ];

        let report = remove_all(&entries);

        assert_eq!(report.removed_count(), 2);
        assert_eq!(report.skipped_count(), 2);
        assert!(!temp.path().join("last.log").exists());
        let skipped: Vec<_> = report.skipped().map(|(e, _)| e.name()).collect();
        assert_eq!(skipped, vec!["missing.tmp", "full"]);
    }

    #[test]
    fn entry_removed_twice_counts_once() {
        let temp = create_tree(&["dup.log"]);
        let entry = Entry::new(temp.path().join("dup.log"));

        assert_eq!(delete_entries(&[entry.clone(), entry]), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_unlinked_without_touching_target() {
        let temp = create_tree(&["target/keep.txt"]);
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("target"), &link).unwrap();

        assert_eq!(remove_entry(&Entry::new(&link)), RemovalOutcome::Removed);
        assert!(std::fs::symlink_metadata(&link).is_err());
        assert!(temp.path().join("target/keep.txt").exists());
    }

    #[cfg(windows)]
    #[test]
    fn directory_link_is_removed_without_touching_target() {
        let temp = create_tree(&["target/keep.txt"]);
        let link = temp.path().join("link");
        if std::os::windows::fs::symlink_dir(temp.path().join("target"), &link).is_err() {
            // Creating symlinks needs developer mode or elevation.
            return;
        }

        assert_eq!(remove_entry(&Entry::new(&link)), RemovalOutcome::Removed);
        assert!(std::fs::symlink_metadata(&link).is_err());
        assert!(temp.path().join("target/keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn directory_symlink_is_not_treated_as_directory_link() {
        let temp = create_tree(&["target/"]);
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("target"), &link).unwrap();

        let file_type = std::fs::symlink_metadata(&link).unwrap().file_type();

        assert!(!is_dir_link(&file_type));
        assert_eq!(remove_entry(&Entry::new(&link)), RemovalOutcome::Removed);
        assert!(temp.path().join("target").is_dir());
    }

    #[test]
    fn skip_reasons_render_for_display() {
        assert_eq!(SkipReason::NotEmpty.to_string(), "directory not empty");
        assert_eq!(SkipReason::Other("busy".into()).to_string(), "busy");
    }
}
