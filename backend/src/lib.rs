pub mod cities;
pub mod config;
pub mod midwares;
pub mod route_handlers;
pub mod upstream;

use std::path::Path;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::{ServeDir, ServeFile}, trace::TraceLayer};

use midwares::app_state::AppState;
use route_handlers::prices::{all_prices_handler, api_not_found, cities_handler, city_price_handler, health_handler};

/// Builds the full application: the JSON API under `/api` and, for every other path,
/// files from `public_dir` with `index.html` as the fallback for client-side routes.
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
  let api = Router::new()
    .route("/cities", get(cities_handler))
    .route("/city/{city_name}", get(city_price_handler))
    .route("/all-prices", get(all_prices_handler))
    .route("/health", get(health_handler))
    .fallback(api_not_found);

  let spa = ServeDir::new(public_dir)
    .fallback(ServeFile::new(public_dir.join("index.html")));

  Router::new()
    .nest("/api", api)
    .fallback_service(spa)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
