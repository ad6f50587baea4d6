use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";
pub const ERROR_PRICE: &str = "Error";
pub const PARSE_FAILURE: &str = "Failed to parse response";

/// One city's normalized price record. Prices are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
  pub city: String,
  pub price22k: String,
  pub price24k: String,
  pub unit: String,
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl PriceQuote {
  pub fn failure(city: &str, error: impl Into<String>) -> Self {
    Self {
      city: city.to_string(),
      price22k: ERROR_PRICE.to_string(),
      price24k: ERROR_PRICE.to_string(),
      unit: NOT_AVAILABLE.to_string(),
      success: false,
      error: Some(error.into()),
    }
  }

  /// Shapes an upstream body for `city`. The upstream keys prices as
  /// `<city>_22k` / `<city>_24k` next to a shared `Unit` field.
  pub fn from_upstream_body(city: &str, body: &str) -> Self {
    let fields = match serde_json::from_str::<Value>(body) {
      Ok(Value::Object(fields)) => fields,
      _ => return Self::failure(city, PARSE_FAILURE),
    };

    let field = |key: &str| display_value(fields.get(key));

    Self {
      city: city.to_string(),
      price22k: field(&format!("{}_22k", city)),
      price24k: field(&format!("{}_24k", city)),
      unit: field("Unit"),
      success: true,
      error: None,
    }
  }
}

// missing, null, empty, false and zero all read as "not available"
fn display_value(value: Option<&Value>) -> String {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => NOT_AVAILABLE.to_string(),
    Some(Value::String(s)) if s.is_empty() => NOT_AVAILABLE.to_string(),
    Some(Value::String(s)) => s.clone(),
    Some(Value::Number(n)) if n.as_f64() == Some(0.0) => NOT_AVAILABLE.to_string(),
    Some(other) => other.to_string(),
  }
}
