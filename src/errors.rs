//! Error type for dictionary ingestion.
//!
//! Only the input source can fail. Dictionary content is never rejected:
//! malformed lines are dropped or overwritten by policy in [`crate::dictionary`].

use std::io;
use std::path::PathBuf;

/// Result type used across the crate, defaulting to [`SpellError`].
pub type Result<T, E = SpellError> = std::result::Result<T, E>;

/// Errors reported while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// The dictionary file could not be opened.
    #[error("invalid dictionary source '{}': {source}", .path.display())]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was opened but an I/O error occurred while lines were
    /// being read.
    #[error("failed to read dictionary source: {0}")]
    Read(#[from] io::Error),
}

impl SpellError {
    /// Returns the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            SpellError::InvalidSource { source, .. } => source,
            SpellError::Read(e) => e,
        }
    }
}
