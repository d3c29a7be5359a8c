//! tagmerge - merge-tag text engine
//!
//! A text-merging engine that takes a block of markup (or a path reference
//! to one) and resolves three classes of embedded merge tags, plus strips
//! comment markers. It is deliberately not a full template language: no
//! conditionals, no loops, no expressions - just deterministic textual
//! merging.
//!
//! # Tag Grammar
//!
//! | Tag      | Syntax                 | Behavior |
//! |----------|------------------------|----------|
//! | Include  | `{inc{<path>}}`        | file loaded and recursively resolved, or JSON parse-and-reflattened for `.json` paths |
//! | Variable | `{{<name>}}`           | replaced from the caller's replacement map |
//! | i18n     | `{i18n{<dotted.key>}}` | replaced from the language-keyed dictionary |
//! | Comment  | `<!--...-->`           | removed verbatim |
//!
//! # Architecture Overview
//!
//! Per render call the pipeline runs in a fixed order: includes are
//! resolved first (recursively, one occurrence at a time), then comments
//! are stripped, then variables, then i18n tags. Included files are read
//! through an injected [`FileLoader`] capability and cached for the life of
//! the process in a shared [`FileCache`]; a forced reload is the only cache
//! invalidation.
//!
//! # Core Modules
//!
//! - [`engine`] - the pipeline orchestrator ([`Engine`]) and include
//!   resolution
//! - [`cache`] - the file-read seam and path-to-content cache
//! - [`tag`] - lexical merge-tag scanning
//! - [`comments`], [`vars`], [`i18n`] - the individual substitution passes
//! - [`core`](crate::core) - error types shared by everything above
//! - [`cli`] - the `tagmerge` command-line interface
//!
//! # Examples
//!
//! ```rust,no_run
//! use tagmerge::{Engine, ReplacementMap};
//!
//! # #[tokio::main]
//! # async fn main() -> tagmerge::Result<()> {
//! let engine = Engine::builder().base_dir("templates").build();
//!
//! let mut vars = ReplacementMap::new();
//! vars.insert("personName".into(), "Joe".into());
//!
//! let page = engine.render("<p>Hi {{personName}}!</p>{inc{/footer.html}}", &vars).await?;
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod cache;
pub mod core;
pub mod engine;

// Resolution passes
pub mod comments;
pub mod i18n;
pub mod tag;
pub mod vars;

// Supporting modules
pub mod cli;
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::cache::{FileCache, FileLoader, FsLoader};
pub use crate::core::{MergeError, Result};
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::i18n::I18nDictionary;
pub use crate::vars::ReplacementMap;
