//! Unpatch use cases

use crate::domain::{join_lines, split_lines, unpatch_all_lines, unpatch_lines, LineEnding};
use crate::domain::{CommentSeparator, UnpatchReport};
use crate::error::Result;
use crate::infrastructure::TextFile;

/// Remove the tagged lines of `target` that match lines of `patch`.
///
/// Patch lines with no tagged counterpart are ignored so that a partially
/// unpatched or hand-edited target can still be cleaned up.
pub fn unpatch(patch: &TextFile, target: &TextFile, sep: &CommentSeparator) -> Result<UnpatchReport> {
    let payload = patch.read_lines()?;
    let content = target.read_to_string()?;
    let ending = LineEnding::detect(&content);

    let (kept, report) = unpatch_lines(split_lines(&content), &payload, sep);
    target.overwrite(&join_lines(&kept, ending))?;

    tracing::debug!(
        file = %target.path.display(),
        removed = report.removed,
        unmatched = report.unmatched,
        "removed matching tagged lines"
    );

    Ok(report)
}

/// Remove every tagged line from `target`. Returns how many were removed.
pub fn unpatch_all(target: &TextFile, sep: &CommentSeparator) -> Result<usize> {
    let content = target.read_to_string()?;
    let ending = LineEnding::detect(&content);

    let (kept, removed) = unpatch_all_lines(split_lines(&content), sep);
    target.overwrite(&join_lines(&kept, ending))?;

    tracing::debug!(file = %target.path.display(), removed, "removed all tagged lines");

    Ok(removed)
}
