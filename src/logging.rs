//! Diagnostic logging.
//!
//! Writes to stderr so styled stdout output stays clean. Quiet (`warn`) by
//! default; `RUST_LOG` overrides at runtime:
//!
//! ```bash
//! RUST_LOG=debug ucdgen generate
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Call once at startup. Safe to call multiple times (only the first call
/// takes effect).
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    });
}
