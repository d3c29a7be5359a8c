//! File-content caching and the injected file-read capability.
//!
//! Includes and path-referenced templates are read through a single seam,
//! the [`FileLoader`] trait, so the engine never touches the filesystem
//! directly and tests can substitute any content source. On top of the
//! loader sits [`FileCache`], a process-lifetime path-to-content store:
//! populated lazily on first read, invalidated only by an explicit forced
//! reload, never expired proactively.
//!
//! # Concurrency
//!
//! The cache is backed by [`dashmap::DashMap`] so concurrent render calls
//! can share one cache without a locking discipline. Per-key writes are
//! idempotent whole-string overwrites: the worst case under a racing pair of
//! misses is a duplicate read, never a corrupted or partial value.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;

use crate::core::{MergeError, Result};

/// The minimal file-read capability injected into the engine.
///
/// This is the sole I/O seam: no directory listing, no writes. `path` is the
/// literal tag body as written in the template (leading separator included);
/// how it maps onto real storage is the implementation's business.
pub trait FileLoader: Send + Sync {
    /// Read the full contents of the file at `path` as UTF-8 text.
    fn load<'a>(&'a self, path: &'a str) -> BoxFuture<'a, io::Result<String>>;
}

/// [`FileLoader`] over a host-owned base directory on the local filesystem.
///
/// Template paths carry a leading separator (`/partials/header.html`); the
/// leading separators are stripped and the remainder is joined onto the base
/// directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base_dir: PathBuf,
}

impl FsLoader {
    /// Create a loader rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path.trim_start_matches(['/', '\\']))
    }
}

impl FileLoader for FsLoader {
    fn load<'a>(&'a self, path: &'a str) -> BoxFuture<'a, io::Result<String>> {
        let full_path = self.resolve(path);
        Box::pin(async move { tokio::fs::read_to_string(&full_path).await })
    }
}

/// Process-lifetime store of previously read file contents, keyed by the
/// literal path string.
///
/// Entries, once written, are immutable strings: a forced reload overwrites
/// the whole entry, it never patches one. Clone the surrounding
/// [`Arc<FileCache>`] to share a cache between engines or concurrent render
/// calls.
pub struct FileCache {
    entries: DashMap<String, String>,
    loader: Arc<dyn FileLoader>,
}

impl FileCache {
    /// Create an empty cache reading through `loader`.
    pub fn new(loader: Arc<dyn FileLoader>) -> Self {
        Self {
            entries: DashMap::new(),
            loader,
        }
    }

    /// Convenience constructor: an empty cache over an [`FsLoader`] rooted
    /// at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FsLoader::new(base_dir)))
    }

    /// Get the contents of `path`, reading through the loader on a miss.
    ///
    /// With `force_reload` set, the file is re-read and the cache entry
    /// overwritten even on a hit. Read failures surface as
    /// [`MergeError::FileRead`] wrapping the underlying I/O error; no retry
    /// is attempted and no entry is written.
    pub async fn load(&self, path: &str, force_reload: bool) -> Result<String> {
        if !force_reload {
            if let Some(entry) = self.entries.get(path) {
                tracing::debug!("cache hit for '{path}'");
                return Ok(entry.value().clone());
            }
        }

        tracing::debug!("reading '{path}' through loader");
        let contents = self.loader.load(path).await.map_err(|source| MergeError::FileRead {
            path: path.to_string(),
            source,
        })?;

        self.entries.insert(path.to_string(), contents.clone());
        Ok(contents)
    }

    /// Get the contents of `path` parsed as JSON.
    ///
    /// The raw contents are trimmed before parsing; a parse failure is fatal
    /// and names the offending path. The cache stores the raw text, so a
    /// later plain [`load`](Self::load) of the same path sees identical
    /// content.
    pub async fn load_json(&self, path: &str, force_reload: bool) -> Result<serde_json::Value> {
        let contents = self.load(path, force_reload).await?;
        serde_json::from_str(contents.trim()).map_err(|source| MergeError::InvalidJson {
            path: path.to_string(),
            source,
        })
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for FileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCache").field("entries", &self.entries.len()).finish_non_exhaustive()
    }
}
