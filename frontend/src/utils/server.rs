use std::fmt;
use serde::Deserialize;

/* Server Responses */
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceQuote {
  pub city: String,
  pub price22k: String,
  pub price24k: String,
  pub unit: String,
  pub success: bool,
  #[serde(default)]
  pub error: Option<String>,
}

impl PriceQuote {
  pub fn is_error_price(value: &str) -> bool {
    value == "Error"
  }
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  RequestError(String),
  StatusError(u16),
  ContentTypeError(String),
  DeserializeError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::RequestError(msg) => write!(f, "Request error: {}", msg),
      AppError::StatusError(code) => write!(f, "HTTP error! status: {}", code),
      AppError::ContentTypeError(found) => write!(f, "Response is not JSON (content-type: {})", found),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}
