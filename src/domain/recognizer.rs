//! Recognition of lines produced by the tagger

use crate::domain::{CommentSeparator, Tag};

/// Decide whether `line` was produced by [`tag_line`](crate::domain::tag_line)
/// and, if so, return the original content.
///
/// Only the last occurrence of the separator is considered, so content that
/// itself contains the separator is handled. Anything that does not end in a
/// well-formed, consistent tag yields `None`.
pub fn recognize<'a>(line: &'a str, sep: &CommentSeparator) -> Option<&'a str> {
    let idx = line.rfind(sep.as_str())?;
    let after = idx + sep.len();

    // Room for the leading space, the trailing space and at least one more byte.
    if idx < 1 || line.len() - after < 2 {
        return None;
    }

    // Stricter than a bare offset split: both spaces the tagger writes must be
    // present. This also keeps the slices below on char boundaries.
    let bytes = line.as_bytes();
    if bytes[idx - 1] != b' ' || bytes[after] != b' ' {
        return None;
    }

    Tag::parse(&line[after + 1..])?;
    Some(&line[..idx - 1])
}

pub fn is_patched(line: &str, sep: &CommentSeparator) -> bool {
    recognize(line, sep).is_some()
}
