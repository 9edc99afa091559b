//! HTTP handlers.

mod batch;
mod expand;
mod info;

pub use batch::{expand_batch_handler, expand_multiple_handler};
pub use expand::{expand_handler, expand_url_handler};
pub use info::{docs_handler, health_handler, method_not_allowed, not_found};
