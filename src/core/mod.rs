//! Core types for tagmerge
//!
//! This module holds the foundations shared by every pass of the pipeline:
//! the strongly-typed error surface and the crate-wide [`Result`] alias.
//!
//! # Design Principles
//!
//! ## No partial output
//! Every fatal condition rejects the whole render call. A caller either gets
//! the fully resolved text or a [`MergeError`]; there is no partial-success
//! mode to reason about.
//!
//! ## Graceful degradation for non-fatal conditions
//! Conditions the legacy engine tolerated (empty input, a dictionary with no
//! entry for the requested language, unknown variable keys) stay tolerated:
//! they degrade in place and are logged, never raised.

pub mod error;

pub use error::{MergeError, Result};
