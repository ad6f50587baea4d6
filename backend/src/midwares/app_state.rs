use std::sync::Arc;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::{cities::CityList, config::{BatchPolicy, Config}, upstream::client::UpstreamClient};

#[derive(Debug, Error)]
pub enum AppError {
  #[error("City not found")]
  CityNotFound,
  #[error("Not found")]
  NotFound,
  #[error("Configuration error: {0}")]
  Config(String),
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
  #[error("Internal error: {0}")]
  Internal(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let status = match self {
      Self::CityNotFound | Self::NotFound => StatusCode::NOT_FOUND,
      Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = Json(json!({"error": self.to_string()}));

    (status, body).into_response()
  }
}

/// Shared by every handler. Cloning is cheap: the city list sits behind an `Arc`
/// and the upstream client wraps a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct AppState {
  pub cities: Arc<CityList>,
  pub upstream: UpstreamClient,
  pub batch: BatchPolicy,
  pub default_price_limit: Option<usize>,
}

impl AppState {
  pub fn new(config: &Config, cities: CityList) -> Result<Self, AppError> {
    let upstream = UpstreamClient::new(config.upstream.clone())?;

    Ok(Self {
      cities: Arc::new(cities),
      upstream,
      batch: config.batch,
      default_price_limit: config.default_price_limit,
    })
  }

  /// Resolves the `limit` query value against the known set: absent or zero falls
  /// back to the configured default, and the result never exceeds the set size.
  pub fn effective_limit(&self, requested: Option<usize>) -> usize {
    let total = self.cities.len();
    requested
      .filter(|n| *n > 0)
      .or(self.default_price_limit)
      .map_or(total, |n| n.min(total))
  }
}

#[cfg(test)]
mod tests {
  use axum::body::to_bytes;

  use super::*;

  #[tokio::test]
  async fn city_not_found_body_is_exact() {
    let response = AppError::CityNotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"error": "City not found"}));
  }

  #[test]
  fn internal_errors_map_to_500() {
    let response = AppError::Internal("boom".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
