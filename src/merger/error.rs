use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// Defines errors that may occur while merging into a locale document
#[derive(Error, Debug)]
pub enum MergeError {
    /// The locale document does not exist
    #[error("Locale file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// The file is not valid JSON or its root is not an object
    #[error("Invalid JSON in {}: {reason}", .path.display())]
    MalformedDocument { path: PathBuf, reason: String },
    /// Reading or writing the document failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedDocument { path: path.to_path_buf(), reason: reason.into() }
    }

    /// Path of the locale document the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::MalformedDocument { path, .. } | Self::Io { path, .. } => {
                path
            }
        }
    }
}
