//! Internationalization substitution for `{i18n{key}}` merge tags.
//!
//! The dictionary is a two-level mapping, language code to key to translated
//! string. It is owned and populated entirely outside the engine - typically
//! deserialized from a JSON file - and read-only from the engine's
//! perspective.
//!
//! The pass is non-fatal by construction: an absent dictionary or an unknown
//! language skips the pass entirely, and a key missing for a present
//! language falls back to the literal key string so the gap is visible in
//! the output instead of leaving raw tag syntax behind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::I18N_TAG;
use crate::tag::{find_merge_tags, merge_tag};

/// Language-keyed table of translated strings.
///
/// Deserializes transparently from the natural JSON shape:
///
/// ```json
/// {
///   "en": { "menu.title": "Menu" },
///   "de": { "menu.title": "Menü" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct I18nDictionary(HashMap<String, HashMap<String, String>>);

impl I18nDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation for `key` under `lang`.
    pub fn insert(
        &mut self,
        lang: impl Into<String>,
        key: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.0.entry(lang.into()).or_default().insert(key.into(), translation.into());
    }

    /// Whether the dictionary holds any entries for `lang`.
    pub fn contains_lang(&self, lang: &str) -> bool {
        self.0.contains_key(lang)
    }

    /// Look up the translation for `key` under `lang`.
    pub fn translate(&self, lang: &str, key: &str) -> Option<&str> {
        self.0.get(lang).and_then(|entries| entries.get(key)).map(String::as_str)
    }
}

/// Resolve `{i18n{key}}` tags in `text` for the given language.
///
/// If no dictionary is supplied, or `lang` has no entries in it, the whole
/// pass is skipped and the input is returned unchanged. A key absent from
/// the language's table substitutes the literal key string.
pub fn substitute_i18n(text: &str, lang: &str, dictionary: Option<&I18nDictionary>) -> String {
    let Some(dictionary) = dictionary else {
        tracing::debug!("no i18n dictionary configured, skipping i18n pass");
        return text.to_string();
    };

    if !dictionary.contains_lang(lang) {
        tracing::debug!("no '{lang}' entries in i18n dictionary, skipping i18n pass");
        return text.to_string();
    }

    let keys = find_merge_tags(I18N_TAG, text);
    if keys.is_empty() {
        return text.to_string();
    }
    tracing::debug!("found {} i18n tag(s)", keys.len());

    let mut resolved = text.to_string();
    for key in keys {
        let translation = dictionary.translate(lang, key).unwrap_or(key);
        resolved = resolved.replacen(&merge_tag(I18N_TAG, key), translation, 1);
    }

    resolved
}
