use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EscapeBinsError {
    #[error("Data file not found: {}", .0.display())]
    DataUnavailable(PathBuf),

    #[error("Malformed data file {}: {source}", path.display())]
    DataMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Binary not found: {0}")]
    NotFound(String),

    #[error("No binaries found starting with '{0}'")]
    EmptyFilterResult(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl EscapeBinsError {
    /// Errors the CLI reports as a message and then carries on with exit code 0.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EscapeBinsError::DataUnavailable(_)
                | EscapeBinsError::NotFound(_)
                | EscapeBinsError::EmptyFilterResult(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EscapeBinsError>;
