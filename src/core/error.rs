//! Error handling for tagmerge
//!
//! This module provides the strongly-typed error surface for merge-tag
//! resolution. The design follows two principles:
//! 1. **Fatal conditions reject the whole call** - a failed include load,
//!    invalid JSON, or an include cycle never produces partial output.
//! 2. **Non-fatal conditions never surface here** - empty input, a missing
//!    dictionary language, or an unknown variable key degrade gracefully
//!    inside the pipeline and are at most logged.
//!
//! Errors carry the literal include path (the tag body as written in the
//! template) rather than a resolved filesystem path, since the engine only
//! ever sees paths through the injected [`FileLoader`] seam.
//!
//! [`FileLoader`]: crate::cache::FileLoader

use thiserror::Error;

/// The error type for merge-tag resolution.
///
/// Every variant is fatal to the enclosing render call. Variants carry the
/// context needed to name the failing template path or cycle in the message.
#[derive(Error, Debug)]
pub enum MergeError {
    /// A path reference or `{inc{}}` tag was encountered but the engine was
    /// built without a file loader.
    ///
    /// The file-read capability is injected at construction time; when it is
    /// absent, any path-based operation fails fast instead of probing the
    /// environment.
    #[error("no file loader configured, cannot load '{path}'")]
    FileSystemUnavailable {
        /// The path that could not be loaded.
        path: String,
    },

    /// Reading a file through the loader failed.
    ///
    /// Wraps the underlying I/O failure; no retry is attempted.
    #[error("failed to read '{path}'")]
    FileRead {
        /// The path as written in the template.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A `.json` include did not contain valid JSON.
    #[error("file contained invalid JSON: {path}")]
    InvalidJson {
        /// The offending include path.
        path: String,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// An include path reappeared in its own resolution chain.
    ///
    /// The chain lists the in-progress include paths from the outermost
    /// template down to the repeated path that closes the cycle.
    #[error("circular include detected: {}", .chain.join(" -> "))]
    CircularInclude {
        /// The include chain, ending with the path that closed the cycle.
        chain: Vec<String>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MergeError>;
