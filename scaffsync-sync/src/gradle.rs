//! LinePatcher — targeted whole-line replacement in the build script.
//!
//! Locates the SDK-version declaration by token and overwrites that entire
//! line with a fixed literal. Whole-line means any indentation or trailing
//! comment on the matched line is deliberately discarded.

use std::path::Path;

use crate::error::SyncError;
use crate::lines;

/// Replace the first line of `dest` containing `token` with `replacement`.
///
/// [`SyncError::AnchorNotFound`] if no line matches.
pub fn patch_line(dest: &Path, token: &str, replacement: &str) -> Result<(), SyncError> {
    let mut content = lines::read_lines(dest)?;
    let index = lines::find_line(&content, |line| line.contains(token)).ok_or_else(|| {
        SyncError::AnchorNotFound {
            path: dest.to_path_buf(),
            token: token.to_owned(),
        }
    })?;

    content[index] = replacement.to_owned();
    lines::write_lines(dest, &content)?;
    tracing::info!("patched line {} of {}", index + 1, dest.display());
    Ok(())
}
