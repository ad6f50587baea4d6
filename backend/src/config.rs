use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::midwares::app_state::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_HOST: &str = "gold-silver-live-price-india.p.rapidapi.com";
pub const DEFAULT_UPSTREAM_URL: &str = "https://gold-silver-live-price-india.p.rapidapi.com/gold_price_india_city_value/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 100;

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
  pub url: String,
  pub host: String,
  pub api_key: String,
  pub timeout: Duration,
}

/// How bulk requests are paced against the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
  pub size: usize,
  pub delay: Duration,
}

impl Default for BatchPolicy {
  fn default() -> Self {
    Self {
      size: DEFAULT_BATCH_SIZE,
      delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Config {
  pub port: u16,
  pub cities_file: PathBuf,
  pub public_dir: PathBuf,
  pub upstream: UpstreamConfig,
  pub batch: BatchPolicy,
  /// Bulk limit used when the caller passes none. `None` means every known city.
  pub default_price_limit: Option<usize>,
}

impl Config {
  /// Reads the process environment, after loading `.env` if one exists.
  pub fn from_env() -> Result<Self, AppError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>
  {
    let api_key = lookup("RAPIDAPI_KEY")
      .filter(|k| !k.trim().is_empty())
      .ok_or_else(|| AppError::Config("RAPIDAPI_KEY must be set".to_string()))?;

    let timeout_secs = parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
    let batch_size = parse_or(&lookup, "BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
    if batch_size == 0 {
      return Err(AppError::Config("BATCH_SIZE must be at least 1".to_string()));
    }
    let batch_delay_ms = parse_or(&lookup, "BATCH_DELAY_MS", DEFAULT_BATCH_DELAY_MS)?;

    let default_price_limit = match lookup("DEFAULT_PRICE_LIMIT") {
      Some(raw) => Some(parse_value::<usize>("DEFAULT_PRICE_LIMIT", &raw)?).filter(|n| *n > 0),
      None => None,
    };

    Ok(Self {
      port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
      cities_file: lookup("CITIES_FILE").map_or_else(|| PathBuf::from("cities_list.txt"), PathBuf::from),
      public_dir: lookup("PUBLIC_DIR").map_or_else(|| PathBuf::from("public"), PathBuf::from),
      upstream: UpstreamConfig {
        url: lookup("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
        host: lookup("UPSTREAM_HOST").unwrap_or_else(|| DEFAULT_UPSTREAM_HOST.to_string()),
        api_key,
        timeout: Duration::from_secs(timeout_secs),
      },
      batch: BatchPolicy {
        size: batch_size,
        delay: Duration::from_millis(batch_delay_ms),
      },
      default_price_limit,
    })
  }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr
{
  match lookup(key) {
    Some(raw) => parse_value(key, &raw),
    None => Ok(default),
  }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
  raw.trim()
    .parse::<T>()
    .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", key, raw)))
}
