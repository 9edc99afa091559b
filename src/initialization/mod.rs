//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP clients (redirect-following and Location probe)
//! - Logger
//! - Batch concurrency limiter
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::{init_client, init_redirect_client};
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Used to bound how many URLs of a single batch are resolved at once. A count
/// of zero is raised to one so a batch can always make progress, and counts
/// above `Semaphore::MAX_PERMITS` are capped there.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.clamp(1, Semaphore::MAX_PERMITS)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_semaphore_permits() {
        assert_eq!(init_semaphore(8).available_permits(), 8);
        assert_eq!(init_semaphore(0).available_permits(), 1);
        assert_eq!(
            init_semaphore(usize::MAX).available_permits(),
            Semaphore::MAX_PERMITS
        );
    }
}
