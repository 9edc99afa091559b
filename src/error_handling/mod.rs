//! Error handling.
//!
//! This module provides:
//! - Startup error types (`InitializationError`)
//! - Handler error types rendered as JSON (`ApiError`)
//! - Categorization of absorbed network failures (`ErrorType`)
//!
//! Network failures during resolution are never surfaced as errors; they are
//! categorized, logged, and reported as a per-item `success` flag.

mod api;
mod categorization;
mod types;

// Re-export public API
pub use api::ApiError;
pub use categorization::categorize_reqwest_error;
pub use types::{ErrorType, InitializationError};
