//! Request body shapes.
//!
//! One explicit typed struct per operation; field-level validation happens
//! once at the service boundary, not here. Create/update bodies deserialize
//! straight into [`sweetshop_core::NewSweet`].

use serde::Deserialize;

/// Body for `POST /sweets/:id/purchase` and `POST /sweets/:id/restock`.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

/// Query string for `GET /sweets/search/price?min=&max=`.
///
/// Bounds arrive as raw strings so a non-numeric value falls back to the
/// defaults (`min = 0`, `max` unbounded) instead of a framework-level
/// rejection that would bypass the JSON error envelope.
#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl PriceRangeQuery {
    /// Resolves the bounds, substituting the default for a missing or
    /// unparseable value.
    pub fn bounds(&self) -> (f64, f64) {
        let min = parse_or(self.min.as_deref(), 0.0);
        let max = parse_or(self.max.as_deref(), f64::MAX);
        (min, max)
    }
}

fn parse_or(raw: Option<&str>, default: f64) -> f64 {
    // "NaN" parses successfully but is as meaningless as "abc" here.
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bounds_default_when_missing_or_garbage() {
        let query = PriceRangeQuery { min: None, max: None };
        assert_eq!(query.bounds(), (0.0, f64::MAX));

        let query = PriceRangeQuery {
            min: Some("abc".to_string()),
            max: Some("NaN".to_string()),
        };
        assert_eq!(query.bounds(), (0.0, f64::MAX));
    }

    #[test]
    fn test_price_bounds_parse_numeric_values() {
        let query = PriceRangeQuery {
            min: Some("1.5".to_string()),
            max: Some("3".to_string()),
        };
        assert_eq!(query.bounds(), (1.5, 3.0));
    }
}

/// Body for `POST /auth/register`.
///
/// Fields are optional so a missing one yields the contract's
/// `Email and password are required` message instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
