//! Include resolution for `{inc{path}}` merge tags.
//!
//! Includes are resolved one occurrence at a time, strictly in left-to-right
//! order of first appearance and never concurrently: include processing has
//! side effects on the shared file cache whose order must stay
//! deterministic, and sequential processing bounds peak memory for deeply
//! nested template trees.
//!
//! A `.json` include is parsed and reflattened to a compact string for
//! embedding; any other include is loaded and recursively run through the
//! full pipeline with the same replacement map before splicing. The chain of
//! in-progress include paths is threaded through every recursive call so a
//! reappearing path fails fast as a named cycle instead of recursing without
//! bound.

use std::path::Path;

use crate::constants::{INCLUDE_TAG, JSON_EXTENSION};
use crate::core::{MergeError, Result};
use crate::engine::Engine;
use crate::tag::{find_merge_tags, merge_tag};
use crate::vars::ReplacementMap;

/// Resolve every `{inc{path}}` tag in `text`, splicing fully resolved
/// fragments in place.
///
/// Any failure loading or resolving an include aborts the entire enclosing
/// render call; no partially spliced text is ever returned.
pub(crate) async fn resolve_includes(
    engine: &Engine,
    text: String,
    replacements: &ReplacementMap,
    lang: &str,
    chain: &mut Vec<String>,
) -> Result<String> {
    let paths: Vec<String> =
        find_merge_tags(INCLUDE_TAG, &text).into_iter().map(str::to_owned).collect();
    if paths.is_empty() {
        return Ok(text);
    }
    tracing::debug!("found {} include tag(s)", paths.len());

    let mut text = text;
    for path in paths {
        tracing::debug!("processing include '{path}'");

        if chain.iter().any(|entry| entry == &path) {
            let mut cycle = chain.clone();
            cycle.push(path);
            return Err(MergeError::CircularInclude { chain: cycle });
        }

        let fragment = if is_json_path(&path) {
            // Parse-and-reflatten guarantees the embedded value is valid
            // JSON in compact form, whatever the file's formatting.
            engine.cache_for(&path)?.load_json(&path, false).await?.to_string()
        } else {
            let contents = engine.cache_for(&path)?.load(&path, false).await?;
            chain.push(path.clone());
            let rendered = engine.render_inner(&contents, replacements, lang, chain).await;
            chain.pop();
            rendered?
        };

        // First remaining occurrence only: a tag repeated N times was
        // scanned N times and gets N resolve-and-splice cycles.
        text = text.replacen(&merge_tag(INCLUDE_TAG, &path), &fragment, 1);
    }

    Ok(text)
}

fn is_json_path(path: &str) -> bool {
    Path::new(path).extension().is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION))
}
