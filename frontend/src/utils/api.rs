use dioxus::logger::tracing::{info, warn};
use serde::de::DeserializeOwned;

use super::{router::{Effect, Event}, server::{AppError, PriceQuote}};

/// Origin the `/api` routes live on. A build-time `API_BASE_URL` wins on every target;
/// otherwise the browser uses the page's own origin and native builds a local server.
fn api_base() -> String {
  base_or(option_env!("API_BASE_URL"), default_base)
}

fn base_or(configured: Option<&str>, fallback: impl FnOnce() -> String) -> String {
  match configured.map(str::trim) {
    Some(base) if !base.is_empty() => base.to_string(),
    _ => fallback(),
  }
}

#[cfg(target_arch = "wasm32")]
fn default_base() -> String {
  web_sys::window()
    .and_then(|w| w.location().origin().ok())
    .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base() -> String {
  "http://localhost:3000".to_string()
}

pub fn api_url(path: &str) -> String {
  format!("{}{}", api_base().trim_end_matches('/'), path)
}

fn ensure_json(content_type: Option<&str>) -> Result<(), AppError> {
  match content_type {
    Some(ct) if ct.contains("application/json") => Ok(()),
    Some(ct) => Err(AppError::ContentTypeError(ct.to_string())),
    None => Err(AppError::ContentTypeError("missing".to_string())),
  }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
  let response = reqwest::get(api_url(path)).await.map_err(|e| AppError::RequestError(e.to_string()))?;

  let status = response.status();
  if !status.is_success() {
    return Err(AppError::StatusError(status.as_u16()));
  }

  let content_type = response.headers()
    .get(reqwest::header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok());
  ensure_json(content_type)?;

  response.json::<T>().await.map_err(|e| AppError::DeserializeError(e.to_string()))
}

pub async fn fetch_cities() -> Result<Vec<String>, AppError> {
  get_json("/api/cities").await
}

pub async fn fetch_all_prices(limit: usize) -> Result<Vec<PriceQuote>, AppError> {
  get_json(&format!("/api/all-prices?limit={}", limit)).await
}

pub async fn fetch_quote(city: &str) -> Result<PriceQuote, AppError> {
  let path = super::router::city_path(city);
  get_json(&format!("/api{}", path)).await
}

/// Runs one fetch effect and turns its outcome into the event the router expects.
/// Returns `None` for effects that are not fetches.
pub async fn perform(effect: Effect) -> Option<Event> {
  let event = match effect {
    Effect::LoadCities => match fetch_cities().await {
      Ok(cities) => {
        info!("loaded {} cities", cities.len());
        Event::CitiesLoaded(cities)
      },
      Err(e) => {
        warn!("failed to load cities: {}", e);
        Event::CitiesFailed(e.to_string())
      }
    },
    Effect::FetchAllPrices { limit, request } => {
      let result = fetch_all_prices(limit).await.map_err(|e| e.to_string());
      Event::PricesLoaded { request, result }
    },
    Effect::FetchQuote { city, request } => {
      let result = fetch_quote(&city).await.map_err(|e| e.to_string());
      Event::QuoteLoaded { city, request, result }
    },
    Effect::PushPath(_) => return None,
  };
  Some(event)
}
