use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevtoolsError {
    /// Corpus directory does not exist.
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Corpus directory exists but cannot be read.
    #[error("access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    /// Table line that is not four non-negative integers, or a value the
    /// formatter refuses to render.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Byte list token that is not an integer in 0..=255.
    #[error("malformed byte #{index}: {token:?}")]
    MalformedByte { index: usize, token: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevtoolsError>;

impl DevtoolsError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.into()),
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied(path.into()),
            _ => Self::Io(err),
        }
    }

    pub(crate) fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
