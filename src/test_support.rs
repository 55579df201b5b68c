use crate::entry::Entry;
use std::path::Path;
use tempfile::TempDir;

/// Build a temporary tree. Paths ending in `/` become directories, anything
/// else becomes a small file (parents are created as needed).
pub(crate) fn create_tree(paths: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), paths);
    temp_dir
}

pub(crate) fn populate(root: &Path, paths: &[&str]) {
    for rel in paths {
        let full = root.join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            std::fs::create_dir_all(&full)
                .unwrap_or_else(|e| panic!("failed to create dir {}: {}", full.display(), e));
        } else {
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full, rel.as_bytes())
                .unwrap_or_else(|e| panic!("failed to write {}: {}", full.display(), e));
        }
    }
}

pub(crate) fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(Entry::name).collect()
}
