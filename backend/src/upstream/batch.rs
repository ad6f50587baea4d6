use futures::future::join_all;
use tokio::time::sleep;
use tracing::debug;

use crate::config::BatchPolicy;
use super::{client::QuoteSource, quote::PriceQuote};

/// Fetches quotes for `cities` in sequential batches of `policy.size`, every call in a
/// batch running concurrently, with `policy.delay` between one batch finishing and the
/// next starting. Output order matches `cities`.
pub async fn fetch_in_batches<S: QuoteSource>(source: &S, cities: &[String], policy: BatchPolicy) -> Vec<PriceQuote> {
  let batch_size = policy.size.max(1);
  let total_batches = cities.len().div_ceil(batch_size);
  let mut quotes = Vec::with_capacity(cities.len());

  for (idx, batch) in cities.chunks(batch_size).enumerate() {
    if idx > 0 {
      sleep(policy.delay).await;
    }

    let results = join_all(batch.iter().map(|city| source.fetch_quote(city))).await;
    let failed = results.iter().filter(|q| !q.success).count();
    debug!("batch {}/{} done: {} quotes, {} failed", idx + 1, total_batches, results.len(), failed);

    quotes.extend(results);
  }

  quotes
}
