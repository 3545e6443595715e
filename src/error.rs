//! Error taxonomy for path listing failures

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A per-path listing failure.
///
/// These are reported at the traversal boundary and never abort the
/// remaining paths. The `Display` text is the reason only; callers prepend
/// the offending path.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("No such file or directory")]
    NotFound { path: PathBuf },

    #[error("Permission denied")]
    PermissionDenied { path: PathBuf },

    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Map an `io::Error` for `path` into the listing taxonomy.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// The path this failure is associated with.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                path
            }
        }
    }
}
