use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
  midwares::app_state::{AppError, AppState},
  upstream::{batch::fetch_in_batches, client::QuoteSource, quote::PriceQuote}
};

#[derive(Debug, Deserialize)]
pub struct PriceListParams {
  // kept as text so a malformed value falls back to the default instead of a 400
  pub limit: Option<String>,
}

impl PriceListParams {
  fn requested_limit(&self) -> Option<usize> {
    self.limit.as_deref().and_then(|raw| raw.trim().parse::<usize>().ok())
  }
}

pub async fn cities_handler(State(state): State<AppState>) -> Json<Vec<String>> {
  Json(state.cities.as_slice().to_vec())
}

pub async fn city_price_handler(
  State(state): State<AppState>,
  Path(city_name): Path<String>
) -> Result<Json<PriceQuote>, AppError> {
  if !state.cities.contains(&city_name) {
    return Err(AppError::CityNotFound);
  }

  Ok(Json(state.upstream.fetch_quote(&city_name).await))
}

pub async fn all_prices_handler(
  State(state): State<AppState>,
  Query(params): Query<PriceListParams>
) -> Json<Vec<PriceQuote>> {
  let limit = state.effective_limit(params.requested_limit());
  let selected = state.cities.first(limit);
  info!("fetching {} quotes in batches of {}", selected.len(), state.batch.size);

  Json(fetch_in_batches(&state.upstream, selected, state.batch).await)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
  Json(json!({"status": "ok", "cities": state.cities.len()}))
}

pub async fn api_not_found() -> AppError {
  AppError::NotFound
}
