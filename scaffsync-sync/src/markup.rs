//! MarkupInjector — structured line insertion into the platform manifest.
//!
//! Inserts a fixed block of permission declarations immediately after the
//! line that closes the document's root opening tag. The insertion is an
//! upsert: when the block's leading declaration is already present, the file
//! is left alone, so re-running synchronization never duplicates the block.

use std::path::Path;

use crate::error::SyncError;
use crate::lines;

/// Result of a block injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// The block was inserted and the file rewritten.
    Inserted,
    /// The block's leading line was already present; nothing written.
    AlreadyPresent,
}

/// Insert `block` (joined with newlines) after the first line of `dest`
/// containing `>`.
///
/// That line is assumed to terminate the root opening tag. If no line
/// qualifies the file has no recognizable root element and
/// [`SyncError::AnchorNotFound`] is raised — inserting at an arbitrary
/// position would corrupt the manifest.
pub fn inject_block(dest: &Path, block: &[String]) -> Result<Injection, SyncError> {
    let Some(leading) = block.first() else {
        return Ok(Injection::AlreadyPresent);
    };

    let mut content = lines::read_lines(dest)?;
    if content.iter().any(|line| line.contains(leading.as_str())) {
        tracing::debug!("block already present in {}", dest.display());
        return Ok(Injection::AlreadyPresent);
    }

    let anchor = lines::find_line(&content, |line| line.contains('>')).ok_or_else(|| {
        SyncError::AnchorNotFound {
            path: dest.to_path_buf(),
            token: ">".into(),
        }
    })?;

    content.insert(anchor + 1, block.join("\n"));
    lines::write_lines(dest, &content)?;
    tracing::info!("inserted {} declarations into {}", block.len(), dest.display());
    Ok(Injection::Inserted)
}
