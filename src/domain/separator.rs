//! Comment separator token

use crate::domain::tag::MARKER;
use crate::error::{PuddingError, Result};
use std::fmt;
use std::str::FromStr;

/// The comment-start token placed between a patch line and its tag.
///
/// Recognition relies on the last occurrence of the separator in a line being
/// the one inserted by the tagger, so tokens that could also appear inside the
/// tag suffix are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSeparator(String);

impl CommentSeparator {
    pub fn new(symbol: &str) -> Result<Self> {
        let invalid = |reason: &str| PuddingError::InvalidSeparator {
            symbol: symbol.to_string(),
            reason: reason.to_string(),
        };

        if symbol.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        if symbol.contains('|') || symbol.contains(',') {
            return Err(invalid("must not contain '|' or ','"));
        }
        if MARKER.contains(symbol) {
            return Err(invalid("collides with the tag marker"));
        }
        if symbol
            .chars()
            .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch))
        {
            return Err(invalid("must not consist of hex digits only"));
        }

        Ok(CommentSeparator(symbol.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, used for all offset arithmetic
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CommentSeparator {
    fn default() -> Self {
        CommentSeparator("#".to_string())
    }
}

impl FromStr for CommentSeparator {
    type Err = PuddingError;

    fn from_str(s: &str) -> Result<Self> {
        CommentSeparator::new(s)
    }
}

impl fmt::Display for CommentSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
