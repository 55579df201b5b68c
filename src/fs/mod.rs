//! Filesystem helpers shared by the scanner and the autostart store.
//!
//! These return plain `io::Result` because both callers collapse failures
//! into their own silent contracts rather than user-facing errors.

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

/// Rename `source` to `destination`, refusing to replace an existing file.
///
/// Returns `ErrorKind::AlreadyExists` when something (file, directory, or
/// dangling symlink) already occupies `destination`. On POSIX a plain
/// `rename()` would silently overwrite it.
pub fn rename_no_clobber<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> io::Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if fs::symlink_metadata(destination).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("'{}' already exists", destination.display()),
        ));
    }

    fs::rename(source, destination)
}

/// Whether `path` is a directory with no entries at all.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    match fs::read_dir(path)?.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(e),
    }
}

/// Kind of a directory listing entry, as the scanner needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListedKind {
    /// Regular file, or anything that does not resolve to a directory.
    File,
    /// A real directory the scanner may descend into.
    Dir,
    /// A symlink that resolves to a directory: reported as a directory, never descended.
    DirLink,
}

/// Determine the [`ListedKind`] of a directory listing entry.
///
/// Symlinks are resolved once to decide whether they count as directories;
/// a dangling symlink counts as a file.
pub fn listed_kind(entry: &DirEntry) -> io::Result<ListedKind> {
    let file_type = entry.file_type()?;

    if file_type.is_dir() {
        Ok(ListedKind::Dir)
    } else if file_type.is_symlink() {
        let points_to_dir = fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false);
        Ok(if points_to_dir {
            ListedKind::DirLink
        } else {
            ListedKind::File
        })
    } else {
        Ok(ListedKind::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rename_no_clobber_moves_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("App.lnk");
        let destination = temp.path().join("App.lnk.disabled");
        std::fs::write(&source, b"shortcut").unwrap();

        rename_no_clobber(&source, &destination).unwrap();

        assert!(!source.exists());
        assert_eq!(std::fs::read(&destination).unwrap(), b"shortcut");
    }

    #[test]
    fn rename_no_clobber_refuses_existing_destination() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source.txt");
        let destination = temp.path().join("destination.txt");
        std::fs::write(&source, b"new").unwrap();
        std::fs::write(&destination, b"old").unwrap();

        let err = rename_no_clobber(&source, &destination).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read(&source).unwrap(), b"new");
        assert_eq!(std::fs::read(&destination).unwrap(), b"old");
    }

    #[test]
    fn is_empty_dir_distinguishes_contents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");
        std::fs::create_dir(&dir).unwrap();
        assert!(is_empty_dir(&dir).unwrap());

        std::fs::write(dir.join("f"), b"").unwrap();
        assert!(!is_empty_dir(&dir).unwrap());
    }

    #[test]
    fn is_empty_dir_errors_on_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(is_empty_dir(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn listed_kind_separates_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("file.log"), b"").unwrap();

        for entry in std::fs::read_dir(temp.path()).unwrap() {
            let entry = entry.unwrap();
            let kind = listed_kind(&entry).unwrap();
            if entry.file_name() == "sub" {
                assert_eq!(kind, ListedKind::Dir);
            } else {
                assert_eq!(kind, ListedKind::File);
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn listed_kind_marks_directory_symlinks() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        std::fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling"))
            .unwrap();

        for entry in std::fs::read_dir(temp.path()).unwrap() {
            let entry = entry.unwrap();
            let kind = listed_kind(&entry).unwrap();
            match entry.file_name().to_str().unwrap() {
                "target" => assert_eq!(kind, ListedKind::Dir),
                "link" => assert_eq!(kind, ListedKind::DirLink),
                "dangling" => assert_eq!(kind, ListedKind::File),
                other => panic!("unexpected entry {other}"),
            }
        }
    }
}
