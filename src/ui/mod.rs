//! User interface module - operator-facing console output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - logging setup shared by the binaries

use tracing_subscriber::EnvFilter;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_release_outcome, display_status,
    display_success, format_category_summary,
};

/// Install the diagnostic log subscriber.
///
/// Logs go to stderr; the filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
