//! Error types for scaffsync-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from synchronizer operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination artifact that must pre-exist was not found.
    #[error("missing destination artifact: {path}")]
    MissingArtifact { path: PathBuf },

    /// A required scan token was absent from the target file; patching at an
    /// arbitrary position would corrupt it, so this is fatal.
    #[error("anchor '{token}' not found in {path}")]
    AnchorNotFound { path: PathBuf, token: String },

    /// A manifest failed to parse as structured key/value data.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A manifest is missing a dependency mapping the merge is defined over.
    #[error("manifest at {path} has no '{section}' mapping")]
    MissingSection { path: PathBuf, section: String },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
