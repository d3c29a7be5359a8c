//! Merge-tag scanning.
//!
//! A merge tag is a textual placeholder of the form `{tagName{body}}`. The
//! variable tag is the degenerate case with an empty tag name, `{{body}}`.
//! The scanner is purely lexical: it splits on the opening delimiter
//! `{tagName{` and reads each body up to the first `}}`. There is no
//! escaping - a literal `{{` inside data content is always interpreted as a
//! tag start.

/// Find every occurrence of the given merge tag in `text`, left to right.
///
/// Returns the tag bodies in the order encountered, one entry per
/// occurrence. Duplicate bodies are returned once per occurrence, not
/// deduplicated - substitution relies on this to resolve repeated tags.
///
/// `tag_name` may be empty to scan for bare `{{body}}` variable tags.
///
/// A fragment with no closing `}}` yields the remainder of the text as the
/// body; downstream replacement of the fully delimited tag is then a no-op.
///
/// # Examples
///
/// ```rust
/// use tagmerge::tag::find_merge_tags;
///
/// let bodies = find_merge_tags("inc", "a {inc{/x.html}} b {inc{/y.html}}");
/// assert_eq!(bodies, vec!["/x.html", "/y.html"]);
///
/// let vars = find_merge_tags("", "{{first}} and {{first}}");
/// assert_eq!(vars, vec!["first", "first"]);
/// ```
pub fn find_merge_tags<'a>(tag_name: &str, text: &'a str) -> Vec<&'a str> {
    let open = format!("{{{tag_name}{{");

    if !text.contains(&open) {
        return Vec::new();
    }

    // Every fragment after the first starts with a tag body running up to
    // the first `}}`.
    text.split(&open)
        .skip(1)
        .map(|fragment| match fragment.find("}}") {
            Some(end) => &fragment[..end],
            None => fragment,
        })
        .collect()
}

/// Reassemble the literal text of a merge tag from its name and body.
///
/// This is the textual inverse of [`find_merge_tags`] for well-formed tags
/// and is what substitution passes hand to `str::replacen`.
pub fn merge_tag(tag_name: &str, body: &str) -> String {
    format!("{{{tag_name}{{{body}}}}}")
}
