//! Error types for pudding

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pudding
#[derive(Debug, Error)]
pub enum PuddingError {
    #[error("You must specify the target file")]
    MissingTarget,

    #[error("Target file {0} doesn't exist")]
    TargetNotFound(PathBuf),

    #[error("Patch file {0} doesn't exist")]
    PatchNotFound(PathBuf),

    #[error("{0} is not a UTF-8 text file")]
    NotText(PathBuf),

    #[error("Invalid comment symbol '{symbol}': {reason}")]
    InvalidSeparator { symbol: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PuddingError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PuddingError::MissingTarget | PuddingError::InvalidSeparator { .. } => 2,
            PuddingError::TargetNotFound(_)
            | PuddingError::PatchNotFound(_)
            | PuddingError::NotText(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PuddingError::MissingTarget => {
                format!(
                    "{}\n\n\
                    Usage: pudding [-u|-U] [-s] [-c <comment-symbol>] [<patch>.patch] <target>\n\
                    Run 'pudding --help' for details",
                    self
                )
            }
            PuddingError::PatchNotFound(path) => {
                format!(
                    "Patch file {} doesn't exist\n\n\
                    Suggestions:\n\
                    • Patch files are recognized by the .patch extension\n\
                    • Without one, pudding looks for patch.patch in the current directory\n\
                    • Use -U to remove every tagged line without a patch file",
                    path.display()
                )
            }
            PuddingError::InvalidSeparator { symbol, reason } => {
                format!(
                    "Invalid comment symbol '{}': {}\n\n\
                    The comment symbol must be non-empty, contain no whitespace,\n\
                    '|' or ',', and must not look like part of a tag.\n\
                    Example: pudding -c // target.c",
                    symbol, reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PuddingError
pub type Result<T> = std::result::Result<T, PuddingError>;
