//! The merge-tag resolution pipeline.
//!
//! [`Engine`] sequences the individual passes over a template source, per
//! render call:
//!
//! 1. Load the source through the file cache when it is a path reference
//!    (leading `/` or `\`).
//! 2. Resolve `{inc{path}}` includes, recursively re-entering the pipeline
//!    for included template content.
//! 3. Strip `<!-- -->` comments.
//! 4. Substitute `{{name}}` variables from the caller's replacement map.
//! 5. Substitute `{i18n{key}}` tags from the configured dictionary.
//!
//! The ordering is fixed and observable: a variable tag inside a comment is
//! discarded, never evaluated, and included content is fully resolved before
//! it is spliced into its parent.
//!
//! Each render call is one asynchronous unit of work; suspension points
//! occur only at file loads on cache misses or forced reloads. Independent
//! calls may run concurrently and interact only through the shared
//! [`FileCache`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use tagmerge::engine::Engine;
//! use tagmerge::vars::ReplacementMap;
//!
//! # #[tokio::main]
//! # async fn main() -> tagmerge::core::Result<()> {
//! let engine = Engine::builder().base_dir("templates").build();
//!
//! let mut vars = ReplacementMap::new();
//! vars.insert("name".into(), "Joe".into());
//!
//! let page = engine.render("<h1>{{name}}</h1>{inc{/footer.html}}", &vars).await?;
//! # Ok(())
//! # }
//! ```

mod include;

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::cache::{FileCache, FileLoader};
use crate::comments::strip_comments;
use crate::constants::DEFAULT_LANG;
use crate::core::{MergeError, Result};
use crate::i18n::{I18nDictionary, substitute_i18n};
use crate::vars::{ReplacementMap, substitute_variables};

/// The pipeline orchestrator.
///
/// Owns the optional file cache (the only shared mutable state between
/// calls) and the optional i18n dictionary. Construction goes through
/// [`Engine::builder`]; an engine without a cache can still render literal
/// sources, but any path reference or include fails fast with
/// [`MergeError::FileSystemUnavailable`].
///
/// `Engine` is cheap to clone; clones share the same cache and dictionary.
#[derive(Debug, Clone)]
pub struct Engine {
    cache: Option<Arc<FileCache>>,
    dictionary: Option<Arc<I18nDictionary>>,
    default_lang: String,
}

impl Engine {
    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Resolve `source` using the engine's default language.
    ///
    /// See [`render_with_lang`](Self::render_with_lang).
    pub async fn render(&self, source: &str, replacements: &ReplacementMap) -> Result<String> {
        self.render_with_lang(source, replacements, &self.default_lang).await
    }

    /// Resolve `source` - literal template text, or a path reference with a
    /// leading separator - into fully merged output.
    ///
    /// An empty source is not an error: it is logged and passed through
    /// unchanged. On any fatal condition (include cycle, unreadable file,
    /// invalid JSON include, missing loader) the whole call fails; no
    /// partially resolved text is ever returned.
    pub async fn render_with_lang(
        &self,
        source: &str,
        replacements: &ReplacementMap,
        lang: &str,
    ) -> Result<String> {
        let mut chain = Vec::new();
        self.render_inner(source, replacements, lang, &mut chain).await
    }

    /// The shared file cache, if one was configured.
    ///
    /// Callers use this to force-reload paths or to share one cache between
    /// several engines.
    pub fn file_cache(&self) -> Option<&Arc<FileCache>> {
        self.cache.as_ref()
    }

    /// One level of the pipeline; re-entered by include resolution with the
    /// in-progress path chain threaded through.
    pub(crate) fn render_inner<'a>(
        &'a self,
        source: &'a str,
        replacements: &'a ReplacementMap,
        lang: &'a str,
        chain: &'a mut Vec<String>,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            if source.is_empty() {
                tracing::warn!("render was given an empty source, passing it through");
                return Ok(source.to_string());
            }

            // A leading separator marks a path reference. The path joins the
            // chain for the duration of its resolution so a template that
            // includes itself is caught at the first level.
            let (text, pushed) = if source.starts_with(['/', '\\']) {
                if chain.iter().any(|entry| entry == source) {
                    let mut cycle = chain.clone();
                    cycle.push(source.to_string());
                    return Err(MergeError::CircularInclude { chain: cycle });
                }
                let contents = self.cache_for(source)?.load(source, false).await?;
                chain.push(source.to_string());
                (contents, true)
            } else {
                (source.to_string(), false)
            };

            let included = include::resolve_includes(self, text, replacements, lang, chain).await;
            if pushed {
                chain.pop();
            }

            let text = included?;
            let text = strip_comments(&text);
            let text = substitute_variables(&text, replacements);
            Ok(substitute_i18n(&text, lang, self.dictionary.as_deref()))
        })
    }

    pub(crate) fn cache_for(&self, path: &str) -> Result<&FileCache> {
        match self.cache.as_deref() {
            Some(cache) => Ok(cache),
            None => Err(MergeError::FileSystemUnavailable {
                path: path.to_string(),
            }),
        }
    }
}

/// Builder for [`Engine`].
///
/// Cache construction is explicit: nothing is created implicitly at render
/// time, so independent engines (and independent test runs) share state only
/// when handed the same [`Arc<FileCache>`].
#[derive(Default)]
pub struct EngineBuilder {
    cache: Option<Arc<FileCache>>,
    dictionary: Option<Arc<I18nDictionary>>,
    default_lang: Option<String>,
}

impl EngineBuilder {
    /// Use an existing cache, sharing it with whoever else holds the `Arc`.
    pub fn file_cache(mut self, cache: Arc<FileCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Create a fresh cache over the given loader.
    pub fn loader(mut self, loader: Arc<dyn FileLoader>) -> Self {
        self.cache = Some(Arc::new(FileCache::new(loader)));
        self
    }

    /// Create a fresh cache over an [`FsLoader`](crate::cache::FsLoader)
    /// rooted at `base_dir`.
    pub fn base_dir(mut self, base_dir: impl Into<std::path::PathBuf>) -> Self {
        self.cache = Some(Arc::new(FileCache::with_base_dir(base_dir)));
        self
    }

    /// Supply the i18n dictionary.
    pub fn dictionary(mut self, dictionary: I18nDictionary) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    /// Override the default language (initially `en`).
    pub fn default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = Some(lang.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Engine {
        Engine {
            cache: self.cache,
            dictionary: self.dictionary,
            default_lang: self.default_lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
        }
    }
}
