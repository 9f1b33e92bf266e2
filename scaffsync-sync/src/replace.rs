//! Replacer — unconditional whole-file overwrite.
//!
//! Used for artifacts wholly owned by the template: the entry point, the
//! bundler config, and the build-tooling config. Local edits to these never
//! survive synchronization.

use std::path::Path;

use crate::error::{io_err, SyncError};

/// Delete the destination file and copy the source file's bytes verbatim.
///
/// The destination must already exist — a scaffold that lost it is
/// structurally broken, and [`SyncError::MissingArtifact`] is raised rather
/// than papering over that.
pub fn replace_file(source: &Path, dest: &Path) -> Result<(), SyncError> {
    if !dest.exists() {
        return Err(SyncError::MissingArtifact {
            path: dest.to_path_buf(),
        });
    }
    tracing::debug!("deleting {}", dest.display());
    std::fs::remove_file(dest).map_err(|e| io_err(dest, e))?;
    copy(source, dest)
}

/// Create-or-replace variant: a missing destination is allowed and the copy
/// proceeds directly. Used for the platform-tooling config, which freshly
/// generated scaffolds may not contain.
pub fn replace_or_create(source: &Path, dest: &Path) -> Result<(), SyncError> {
    if dest.exists() {
        tracing::debug!("deleting {}", dest.display());
        std::fs::remove_file(dest).map_err(|e| io_err(dest, e))?;
    }
    copy(source, dest)
}

fn copy(source: &Path, dest: &Path) -> Result<(), SyncError> {
    std::fs::copy(source, dest).map_err(|e| io_err(source, e))?;
    tracing::info!("copied {} -> {}", source.display(), dest.display());
    Ok(())
}
