//! Patch use case

use crate::domain::{patch_suffix, CommentSeparator};
use crate::error::Result;
use crate::infrastructure::TextFile;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub appended: usize,
    /// Whether a blank line was inserted because the target lacked a final newline
    pub separated: bool,
}

/// Tag every line of `patch` and append them to `target`.
pub fn patch<R: Rng + ?Sized>(
    patch: &TextFile,
    target: &TextFile,
    sep: &CommentSeparator,
    rng: &mut R,
) -> Result<PatchReport> {
    let payload = patch.read_lines()?;
    let tail = target.tail()?;

    let suffix = patch_suffix(tail, &payload, sep, rng);
    target.append(&suffix)?;

    tracing::debug!(
        file = %target.path.display(),
        lines = payload.len(),
        terminated = tail.terminated,
        "appended tagged lines"
    );

    Ok(PatchReport {
        appended: payload.len(),
        separated: !tail.terminated,
    })
}
