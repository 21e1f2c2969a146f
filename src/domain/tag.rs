//! Self-checking tag appended to patched lines

use crate::domain::CommentSeparator;
use rand::Rng;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Literal that opens every tag
pub const MARKER: &str = "pudding";

/// Regex for a serialized tag: pudding|P,Q,R with uppercase hex fields
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^pudding\|([0-9A-F]+),([0-9A-F]+),([0-9A-F]+)$").unwrap()
    })
}

/// A `(p, q, r)` triple where `r == p ^ q`.
///
/// This is a recognition marker, not a signature: it only has to make an
/// accidental match unlikely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub p: u32,
    pub q: u32,
    pub r: u32,
}

impl Tag {
    /// Build a tag from two draws; `r` is always derived.
    pub fn from_parts(p: u32, q: u32) -> Self {
        Tag { p, q, r: p ^ q }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let p: u32 = rng.gen();
        let q: u32 = rng.gen();
        Tag::from_parts(p, q)
    }

    pub fn is_consistent(&self) -> bool {
        self.p ^ self.q == self.r
    }

    /// Parse the text following the separator and its space.
    ///
    /// Returns `None` for anything that is not a well-formed, consistent tag,
    /// including fields that overflow 32 bits.
    pub fn parse(tail: &str) -> Option<Self> {
        let caps = tag_regex().captures(tail)?;
        let field = |idx: usize| u32::from_str_radix(&caps[idx], 16).ok();

        let tag = Tag {
            p: field(1)?,
            q: field(2)?,
            r: field(3)?,
        };

        tag.is_consistent().then_some(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{:08X},{:08X},{:08X}", MARKER, self.p, self.q, self.r)
    }
}

/// Append a freshly generated tag to `raw` as a trailing comment.
pub fn tag_line<R: Rng + ?Sized>(raw: &str, sep: &CommentSeparator, rng: &mut R) -> String {
    format!("{} {} {}", raw, sep, Tag::generate(rng))
}
