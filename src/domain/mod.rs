//! Domain layer - Tagging protocol and line transforms

pub mod document;
pub mod recognizer;
pub mod separator;
pub mod tag;

pub use document::{
    join_lines, patch_suffix, split_lines, unpatch_all_lines, unpatch_lines, LineEnding,
    TargetTail, UnpatchReport,
};
pub use recognizer::{is_patched, recognize};
pub use separator::CommentSeparator;
pub use tag::{tag_line, Tag, MARKER};
