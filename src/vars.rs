//! Variable substitution for `{{name}}` merge tags.
//!
//! Resolution is driven by a caller-supplied replacement map. Values are
//! arbitrary [`serde_json::Value`]s coerced to text at substitution time:
//! strings embed without quotes, `null` coerces to the empty string so the
//! tag is overwritten rather than rendered as the word "null", and anything
//! else serializes compactly.

use std::collections::HashMap;

use serde_json::Value;

use crate::tag::{find_merge_tags, merge_tag};

/// Caller-owned mapping from variable name to replacement value, read-only
/// for the duration of one render call.
pub type ReplacementMap = HashMap<String, Value>;

/// Coerce a replacement value to the text that is spliced into the output.
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolve `{{name}}` tags in `text` against the replacement map.
///
/// For each tag occurrence the scanner yields, the first remaining textual
/// occurrence of `{{name}}` is replaced with the coerced value. Because the
/// scanner yields one entry per occurrence, a tag appearing N times is fully
/// resolved in one pass - but each individual step is strictly
/// first-occurrence-only, never a blanket replace-all.
///
/// Keys absent from the map leave their tags untouched; this is not an
/// error.
pub fn substitute_variables(text: &str, replacements: &ReplacementMap) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }

    let bodies = find_merge_tags("", text);
    if bodies.is_empty() {
        return text.to_string();
    }
    tracing::debug!("found {} variable tag(s)", bodies.len());

    let mut resolved = text.to_string();
    for body in bodies {
        if let Some(value) = replacements.get(body) {
            resolved = resolved.replacen(&merge_tag("", body), &coerce_value(value), 1);
        }
    }

    resolved
}
