//! Error types for header checking and insertion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for header operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while checking or fixing headers.
#[derive(Debug, Error)]
pub enum Error {
    /// The extension maps to no known comment style. Raised only for
    /// explicitly named paths; directory walks skip unrecognized files.
    #[error("no known comment style for '{path}'")]
    UnknownCommentStyle { path: PathBuf },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
