//! Concurrent expansion of many URLs.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};

use crate::error_handling::ErrorType;
use crate::expand::context::ExpansionContext;
use crate::expand::types::{BatchReport, Expansion};
use crate::expand::{resolve_with_strategy, Strategy};
use crate::initialization::init_semaphore;

/// Expands every URL on its own task and collects results in input order.
///
/// At most `batch_concurrency` URLs are in flight at once. A failure (network
/// error or panicking task) only marks that item as failed; the rest of the
/// batch is unaffected.
pub async fn expand_batch(
    ctx: &ExpansionContext,
    urls: Vec<String>,
    strategy: Strategy,
) -> BatchReport {
    let semaphore = init_semaphore(ctx.settings.batch_concurrency);
    debug!(
        "Expanding batch of {} URL(s), at most {} at once",
        urls.len(),
        semaphore.available_permits()
    );

    let tasks: Vec<_> = urls
        .iter()
        .map(|url| {
            let ctx = ctx.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = url.clone();
            tokio::spawn(async move {
                // The semaphore is never closed, so acquire only fails if it were
                let _permit = semaphore.acquire_owned().await.ok();
                let outcome = resolve_with_strategy(&ctx, &url, strategy).await;
                match outcome.failure {
                    None => Expansion::succeeded(url, outcome.url),
                    Some(error_type) => Expansion::failed(url, error_type.description()),
                }
            })
        })
        .collect();

    let joined = join_all(tasks).await;

    let results: Vec<Expansion> = urls
        .into_iter()
        .zip(joined)
        .map(|(url, task_result)| match task_result {
            Ok(expansion) => expansion,
            Err(join_error) => {
                warn!("Expansion task for {} panicked: {:?}", url, join_error);
                Expansion::failed(url, ErrorType::TaskPanicked.description())
            }
        })
        .collect();

    BatchReport::from(results)
}
