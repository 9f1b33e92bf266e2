//! TreeMerger — recursive directory copy with overwrite-on-conflict.
//!
//! The only synchronizer with a non-destructive merge policy: the scaffold's
//! source tree holds project-specific code next to template-provided files,
//! so destination-only paths must survive.

use std::path::Path;

use crate::error::{io_err, SyncError};

/// Recursively copy every file and subdirectory from `source` into `dest`.
///
/// Paths present in both: the source version wins. Paths present only in the
/// destination: left untouched.
pub fn merge_tree(source: &Path, dest: &Path) -> Result<(), SyncError> {
    std::fs::create_dir_all(dest).map_err(|e| io_err(dest, e))?;

    for entry in std::fs::read_dir(source).map_err(|e| io_err(source, e))? {
        let entry = entry.map_err(|e| io_err(source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| io_err(&from, e))?;

        if file_type.is_dir() {
            merge_tree(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(|e| io_err(&from, e))?;
            tracing::debug!("copied {} -> {}", from.display(), to.display());
        }
    }
    Ok(())
}
