//! Comment stripping.
//!
//! Removes `<!-- -->` comment blocks before variable and i18n substitution
//! run, so commented-out merge tags are discarded rather than evaluated.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Multiline, non-nested; each match ends at the first `-->`.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

/// Remove every `<!--...-->` block from `text`.
///
/// Matches span lines and stop at the first `-->`. Malformed or unbalanced
/// delimiters are left untouched - an opener with no closer is not a
/// comment, and a stray closer is plain text.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT.replace_all(text, "")
}
