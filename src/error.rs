use std::path::Path;

use thiserror::Error;

/// Main error type for the report reformatter
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File I/O error: {path}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Create a file I/O error with the offending path
    pub fn file_io(path: &Path, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type ReportResult<T> = Result<T, ReportError>;
