//! Comment stripping for unit text.
//!
//! Comments are removed before any structural matching so that commented-out
//! declarations never produce entities or members.

use std::sync::LazyLock;

use regex::Regex;

/// A block comment span, non-greedy, across newlines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex"));

/// A line comment suffix up to the end of the line.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("line comment regex"));

/// Remove all block-comment spans and line-comment suffixes.
///
/// Everything outside comments, including line breaks, is left untouched.
/// An unterminated block comment marker simply does not match and stays in
/// the text; downstream scans treat whatever remains as ordinary input.
///
/// # Examples
///
/// ```
/// use plumage_extract::normalize::strip_comments;
///
/// let text = "int a; /* int b; */ int c; // int d;";
/// assert_eq!(strip_comments(text), "int a;  int c; ");
/// ```
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}
