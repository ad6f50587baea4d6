use std::net::SocketAddr;
use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use goldrate_server::{cities::CityList, config::Config, create_router, midwares::app_state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env()?;
  info!("upstream: {} (timeout {:?})", config.upstream.url, config.upstream.timeout);
  info!("batching: {} per batch, {:?} between batches", config.batch.size, config.batch.delay);
  info!("default price limit: {:?}", config.default_price_limit);

  let cities = CityList::from_file(&config.cities_file)
    .with_context(|| format!("failed to read city list from {}", config.cities_file.display()))?;
  let state = AppState::new(&config, cities)?;

  let app = create_router(state, &config.public_dir);

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  let listener = TcpListener::bind(addr).await.with_context(|| format!("failed to bind {}", addr))?;
  info!("server running on {}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("failed to listen for Ctrl+C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => { sig.recv().await; },
      Err(e) => {
        tracing::error!("failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => info!("received Ctrl+C"),
    _ = terminate => info!("received terminate signal"),
  }
}
