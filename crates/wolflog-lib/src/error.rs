use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the boundaries of the transcript parser
///
/// Parsing itself is best-effort and never fails on content; only input that
/// cannot be read as text, or I/O and serialization around it, produce errors.
#[derive(Debug, Error)]
pub enum WolfLogError {
    /// Input is not valid UTF-8
    #[error("Invalid encoding: input is not valid UTF-8 ({0})")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Reading a transcript file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl WolfLogError {
    /// Create a new I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for wolflog operations
pub type Result<T> = std::result::Result<T, WolfLogError>;
