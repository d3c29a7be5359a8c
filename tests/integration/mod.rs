//! Integration test suite for tagmerge
//!
//! End-to-end tests that drive the full render pipeline - and the CLI
//! binary - against real template files in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **render**: pipeline semantics - variables, comments, ordering,
//!   idempotence
//! - **includes**: `{inc{}}` resolution, JSON embedding, cycle rejection
//! - **cache_behavior**: cache reuse, forced reload, cross-engine sharing
//! - **i18n_pass**: dictionary-driven `{i18n{}}` resolution end to end
//! - **cli**: the `tagmerge render` command via the compiled binary

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cache_behavior;
mod i18n_pass;
