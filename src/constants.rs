//! Global constants used throughout the tagmerge codebase.
//!
//! Tag names and defaults that are shared across multiple modules.
//! Defining them centrally keeps the tag grammar discoverable in one place.

/// Default language code for `{i18n{}}` resolution when the caller does not
/// configure one.
pub const DEFAULT_LANG: &str = "en";

/// Tag name of include merge tags, as in `{inc{/partials/header.html}}`.
pub const INCLUDE_TAG: &str = "inc";

/// Tag name of internationalization merge tags, as in `{i18n{menu.title}}`.
pub const I18N_TAG: &str = "i18n";

/// File extension (compared case-insensitively) that switches include
/// resolution from recursive rendering to JSON parse-and-reflatten.
pub const JSON_EXTENSION: &str = "json";
