//! Main application modules.
//!
//! This module provides URL normalization and shutdown handling used by the
//! server.

pub mod shutdown;
pub mod url;

// Re-export public API
pub use shutdown::shutdown_signal;
pub use url::{is_shortener_url, normalize_url};
