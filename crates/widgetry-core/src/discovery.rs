//! Widget directory discovery.
//!
//! Walks the widgets root recursively (the root included) and keeps every
//! directory that holds the configuration file. Unreadable entries are skipped.
//! Entries are visited in file-name order, so discovery order is stable.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Every directory under `root` containing a `config_filename` file, in walk order.
pub fn discover_widget_dirs(root: &Path, config_filename: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(?root, "Widgets root does not exist, skipping");
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "Cannot read widgets entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| entry.path().join(config_filename).is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
