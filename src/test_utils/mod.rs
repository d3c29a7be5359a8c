//! Test utilities shared between unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so integration
//! tests can opt in via the `test-utils` feature without shipping any of
//! this in release builds.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses the given level when provided, else falls back to `RUST_LOG`, else
/// stays silent. Safe to call from every test; only the first call wins.
///
/// # Examples
///
/// ```rust,ignore
/// tagmerge::test_utils::init_test_logging(Some(tracing::Level::DEBUG));
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
