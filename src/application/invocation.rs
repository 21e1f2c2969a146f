//! Resolve command-line input into validated run options

use crate::domain::CommentSeparator;
use crate::error::{PuddingError, Result};
use crate::infrastructure::{Settings, TextFile};
use std::fmt;
use std::path::PathBuf;

/// Patch file used when neither the command line nor the config names one
pub const DEFAULT_PATCH_FILE: &str = "patch.patch";

/// Extension that marks a bare argument as the patch file
pub const PATCH_EXTENSION: &str = ".patch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Patch,
    Unpatch,
    UnpatchAll,
}

impl Operation {
    pub fn needs_patch_file(&self) -> bool {
        !matches!(self, Operation::UnpatchAll)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Patch => "patch",
            Operation::Unpatch => "unpatch",
            Operation::UnpatchAll => "unpatch all",
        };
        f.write_str(name)
    }
}

/// What the user asked for, before validation
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub operation: Operation,
    pub safe: bool,
    pub comment: Option<String>,
    /// Bare arguments in command-line order
    pub args: Vec<String>,
}

/// Validated options; every referenced file existed at resolution time
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub operation: Operation,
    pub safe: bool,
    pub separator: CommentSeparator,
    pub patch: TextFile,
    pub target: TextFile,
}

/// Resolved options plus non-fatal warnings for the user
#[derive(Debug, Clone)]
pub struct Invocation {
    pub options: RunOptions,
    pub warnings: Vec<String>,
}

impl Invocation {
    /// Classify bare arguments, apply defaults and check files.
    ///
    /// The first argument ending in `.patch` is the patch file, the first
    /// other argument is the target, anything else produces a warning.
    /// Command-line values take precedence over `settings`.
    pub fn resolve(request: Request, settings: &Settings) -> Result<Self> {
        let mut warnings = Vec::new();
        let mut patch: Option<String> = None;
        let mut target: Option<String> = None;

        for arg in request.args {
            if patch.is_none() && arg.ends_with(PATCH_EXTENSION) {
                patch = Some(arg);
            } else if target.is_none() {
                target = Some(arg);
            } else {
                warnings.push(format!("unexpected argument {}", arg));
            }
        }

        let operation = request.operation;
        if operation == Operation::UnpatchAll && patch.is_some() {
            warnings.push("patch file will be ignored in -U mode".to_string());
        }

        let separator = match request.comment.as_deref().or(settings.comment.as_deref()) {
            Some(symbol) => CommentSeparator::new(symbol)?,
            None => CommentSeparator::default(),
        };

        let safe = request.safe || settings.safe.unwrap_or(false);

        let patch = patch
            .map(PathBuf::from)
            .or_else(|| settings.patch.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATCH_FILE));
        let patch = TextFile::new(patch);

        let target = TextFile::new(target.ok_or(PuddingError::MissingTarget)?);

        if operation.needs_patch_file() && !patch.exists() {
            return Err(PuddingError::PatchNotFound(patch.path));
        }
        if !target.exists() {
            return Err(PuddingError::TargetNotFound(target.path));
        }

        // Patch only appends, so without this a non-UTF-8 target could be
        // patched but never unpatched.
        if operation.needs_patch_file() && !patch.is_text()? {
            return Err(PuddingError::NotText(patch.path));
        }
        if !target.is_text()? {
            return Err(PuddingError::NotText(target.path));
        }

        tracing::debug!(%operation, safe, separator = %separator, "resolved invocation");

        Ok(Invocation {
            options: RunOptions {
                operation,
                safe,
                separator,
                patch,
                target,
            },
            warnings,
        })
    }
}
