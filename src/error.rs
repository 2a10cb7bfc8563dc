//! Error types for doclint.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Invalid glob pattern: {pattern}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("Directory does not exist: {0}")]
    MissingBaseDir(String),

    #[error("No files found to check")]
    NoFilesMatched,
}

impl LintError {
    /// Process exit code for errors that abort the run. Environment errors
    /// (missing directory, empty scan) are fixed at 1 regardless of the
    /// configured success/failure codes; everything else exits 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            LintError::MissingBaseDir(_) | LintError::NoFilesMatched => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
