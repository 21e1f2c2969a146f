//! Line model and the pure transforms behind patch and unpatch

use crate::domain::{recognize, tag_line, CommentSeparator};
use rand::Rng;
use std::collections::HashMap;

/// Line terminator used when writing a target back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect from the first terminator in `text`; LF when there is none.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Split text into lines. A trailing terminator does not start a new line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Join lines, terminating every one of them.
pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line.as_ref());
        output.push_str(ending.as_str());
    }
    output
}

/// How the existing target ends, which decides what precedes appended lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTail {
    /// Empty targets count as terminated
    pub terminated: bool,
    pub ending: LineEnding,
}

impl TargetTail {
    pub fn of(text: &str) -> Self {
        TargetTail {
            terminated: text.is_empty() || text.ends_with('\n'),
            ending: LineEnding::detect(text),
        }
    }
}

/// Text to append to a target so that every payload line ends up tagged on
/// its own line.
///
/// An unterminated target gets the terminator plus one blank line first.
pub fn patch_suffix<R: Rng + ?Sized>(
    tail: TargetTail,
    payload: &[String],
    sep: &CommentSeparator,
    rng: &mut R,
) -> String {
    let mut suffix = String::new();
    let mut tagged: Vec<String> = Vec::with_capacity(payload.len() + 1);

    if !tail.terminated {
        // Close the dangling last line, then leave one blank line.
        suffix.push_str(tail.ending.as_str());
        tagged.push(String::new());
    }

    tagged.extend(payload.iter().map(|raw| tag_line(raw, sep, rng)));
    suffix.push_str(&join_lines(&tagged, tail.ending));
    suffix
}

/// Outcome of removing tagged lines from a target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpatchReport {
    /// Tagged lines dropped from the target
    pub removed: usize,
    /// Payload lines that found no tagged counterpart
    pub unmatched: usize,
}

/// Remove tagged lines whose content matches the payload.
///
/// Each payload line cancels at most one tagged line, so duplicates in the
/// payload keep their multiplicity. Tagged lines with no remaining payload
/// entry are kept as they are.
pub fn unpatch_lines(
    target: Vec<String>,
    payload: &[String],
    sep: &CommentSeparator,
) -> (Vec<String>, UnpatchReport) {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for line in payload {
        *remaining.entry(line.as_str()).or_insert(0) += 1;
    }

    let mut report = UnpatchReport::default();
    let mut kept = Vec::with_capacity(target.len());

    for line in target {
        let matched = match recognize(&line, sep).and_then(|content| remaining.get_mut(content)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        };

        if matched {
            report.removed += 1;
        } else {
            kept.push(line);
        }
    }

    report.unmatched = remaining.values().sum();
    (kept, report)
}

/// Remove every recognized tagged line, keeping the rest in order.
pub fn unpatch_all_lines(target: Vec<String>, sep: &CommentSeparator) -> (Vec<String>, usize) {
    let before = target.len();
    let kept: Vec<String> = target
        .into_iter()
        .filter(|line| recognize(line, sep).is_none())
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_patched;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\n"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\nb"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\r\nb\r\n"), lines(&["a", "b"]));
        assert_eq!(split_lines("a\n\n"), lines(&["a", ""]));
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(&lines(&["a", "b"]), LineEnding::Lf), "a\nb\n");
        assert_eq!(join_lines(&lines(&["a"]), LineEnding::CrLf), "a\r\n");
        assert_eq!(join_lines::<String>(&[], LineEnding::Lf), "");
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\r\nb\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("no terminator"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_patch_suffix_with_trailing_newline() {
        let sep = CommentSeparator::default();
        let suffix = patch_suffix(TargetTail::of("a\nb\n"), &lines(&["x", "y"]), &sep, &mut rng());

        let added = split_lines(&suffix);
        assert_eq!(added.len(), 2);
        assert_eq!(recognize(&added[0], &sep), Some("x"));
        assert_eq!(recognize(&added[1], &sep), Some("y"));
        assert!(suffix.ends_with('\n'));
    }

    #[test]
    fn test_patch_suffix_without_trailing_newline_adds_blank_line() {
        let sep = CommentSeparator::default();
        let target = "a\nb";
        let suffix = patch_suffix(TargetTail::of(target), &lines(&["x"]), &sep, &mut rng());

        let result = split_lines(&format!("{}{}", target, suffix));
        assert_eq!(result.len(), 4);
        assert_eq!(&result[..3], &lines(&["a", "b", ""])[..]);
        assert_eq!(recognize(&result[3], &sep), Some("x"));
    }

    #[test]
    fn test_patch_suffix_on_empty_target() {
        let sep = CommentSeparator::default();
        let suffix = patch_suffix(TargetTail::of(""), &lines(&["x"]), &sep, &mut rng());
        let added = split_lines(&suffix);
        assert_eq!(added.len(), 1);
        assert!(is_patched(&added[0], &sep));
    }

    #[test]
    fn test_target_tail() {
        assert!(TargetTail::of("").terminated);
        assert!(TargetTail::of("a\n").terminated);
        assert!(!TargetTail::of("a\nb").terminated);
        assert_eq!(TargetTail::of("a\r\nb").ending, LineEnding::CrLf);
    }

    #[test]
    fn test_patch_suffix_keeps_crlf() {
        let sep = CommentSeparator::default();
        let suffix = patch_suffix(TargetTail::of("a\r\n"), &lines(&["x"]), &sep, &mut rng());
        assert!(suffix.ends_with("\r\n"));
    }

    #[test]
    fn test_patch_suffix_tags_are_fresh_per_line() {
        let sep = CommentSeparator::default();
        let suffix = patch_suffix(TargetTail::of(""), &lines(&["x", "x"]), &sep, &mut rng());
        let added = split_lines(&suffix);
        assert_ne!(added[0], added[1]);
    }

    #[test]
    fn test_unpatch_removes_matching_tagged_lines() {
        let sep = CommentSeparator::default();
        let mut rng = rng();
        let target = vec![
            "a".to_string(),
            tag_line("x", &sep, &mut rng),
            "b".to_string(),
            tag_line("y", &sep, &mut rng),
        ];

        let (kept, report) = unpatch_lines(target, &lines(&["x", "y"]), &sep);
        assert_eq!(kept, lines(&["a", "b"]));
        assert_eq!(report, UnpatchReport { removed: 2, unmatched: 0 });
    }

    #[test]
    fn test_unpatch_respects_multiplicity() {
        let sep = CommentSeparator::default();
        let mut rng = rng();
        let first = tag_line("x", &sep, &mut rng);
        let second = tag_line("x", &sep, &mut rng);
        let third = tag_line("x", &sep, &mut rng);
        let target = vec![first, second, third.clone()];

        let (kept, report) = unpatch_lines(target, &lines(&["x", "x"]), &sep);
        assert_eq!(kept, vec![third]);
        assert_eq!(report.removed, 2);
        assert_eq!(report.unmatched, 0);
    }

    #[test]
    fn test_unpatch_leaves_untagged_and_unrelated_lines() {
        let sep = CommentSeparator::default();
        let mut rng = rng();
        let foreign = tag_line("z", &sep, &mut rng);
        let target = vec![
            "x".to_string(),
            "x # not a tag".to_string(),
            foreign.clone(),
        ];

        let (kept, report) = unpatch_lines(target.clone(), &lines(&["x"]), &sep);
        assert_eq!(kept, target);
        assert_eq!(report, UnpatchReport { removed: 0, unmatched: 1 });
    }

    #[test]
    fn test_unpatch_all_removes_every_tagged_line() {
        let sep = CommentSeparator::default();
        let mut rng = rng();
        let target = vec![
            tag_line("x", &sep, &mut rng),
            "keep # me".to_string(),
            tag_line("y", &sep, &mut rng),
        ];

        let (kept, removed) = unpatch_all_lines(target, &sep);
        assert_eq!(kept, lines(&["keep # me"]));
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_unpatch_all_only_matches_its_separator() {
        let hash = CommentSeparator::default();
        let slashes = CommentSeparator::new("//").unwrap();
        let mut rng = rng();
        let target = vec![tag_line("x", &hash, &mut rng)];

        let (kept, removed) = unpatch_all_lines(target.clone(), &slashes);
        assert_eq!(kept, target);
        assert_eq!(removed, 0);
    }
}
