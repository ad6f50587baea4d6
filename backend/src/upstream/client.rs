use std::future::Future;
use tracing::{debug, warn};

use crate::{config::UpstreamConfig, midwares::app_state::AppError};
use super::quote::PriceQuote;

pub const TIMEOUT_FAILURE: &str = "Upstream request timed out";

/// Anything that can produce a quote for one city. Implementations must not fail:
/// every error path resolves to a `success: false` quote.
pub trait QuoteSource: Send + Sync {
  fn fetch_quote(&self, city: &str) -> impl Future<Output = PriceQuote> + Send;
}

/// HTTP client for the third-party price API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
  http: reqwest::Client,
  config: UpstreamConfig,
}

impl UpstreamClient {
  pub fn new(config: UpstreamConfig) -> Result<Self, AppError> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| AppError::Internal(format!("failed to build upstream client: {}", e)))?;

    Ok(Self { http, config })
  }

  fn transport_failure(city: &str, err: reqwest::Error) -> PriceQuote {
    if err.is_timeout() {
      warn!("upstream timed out for {}", city);
      return PriceQuote::failure(city, TIMEOUT_FAILURE);
    }
    warn!("upstream request for {} failed: {}", city, err);
    PriceQuote::failure(city, err.to_string())
  }
}

impl QuoteSource for UpstreamClient {
  async fn fetch_quote(&self, city: &str) -> PriceQuote {
    debug!("fetching upstream quote for {}", city);

    let sent = self.http
      .get(&self.config.url)
      .header("x-rapidapi-key", &self.config.api_key)
      .header("x-rapidapi-host", &self.config.host)
      .header("city", city)
      .send()
      .await;

    let response = match sent {
      Ok(r) => r,
      Err(e) => return Self::transport_failure(city, e),
    };

    let status = response.status();
    if !status.is_success() {
      warn!("upstream responded with {} for {}", status, city);
      return PriceQuote::failure(city, format!("Upstream responded with status {}", status.as_u16()));
    }

    match response.text().await {
      Ok(body) => PriceQuote::from_upstream_body(city, &body),
      Err(e) => Self::transport_failure(city, e),
    }
  }
}
