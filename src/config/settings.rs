//! Valuation settings supplied by the settings provider.
//!
//! The engine reads these once per calculation session and never mutates
//! them. Values that are missing, blank, non-numeric or negative fall back
//! to the defaults below.

use crate::core::numeric::{deserialize_optional_f64, parse_strict_prefix};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_HOURLY_RATE: f64 = 45.0;
pub const DEFAULT_ERROR_COST: f64 = 150.0;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Global valuation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Cost per labor-hour
    #[serde(
        default = "default_hourly_rate",
        deserialize_with = "deserialize_hourly_rate"
    )]
    pub hourly_rate: f64,

    /// Cost per error occurrence
    #[serde(
        default = "default_error_cost",
        deserialize_with = "deserialize_error_cost"
    )]
    pub error_cost: f64,

    /// Display-only currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            error_cost: default_error_cost(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = resolve_rate(Some(rate), DEFAULT_HOURLY_RATE, "hourly_rate");
        self
    }

    pub fn with_error_cost(mut self, cost: f64) -> Self {
        self.error_cost = resolve_rate(Some(cost), DEFAULT_ERROR_COST, "error_cost");
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Build settings from the raw strings a key/value settings store holds.
    pub fn from_raw(
        hourly_rate: Option<&str>,
        error_cost: Option<&str>,
        currency_symbol: Option<&str>,
    ) -> Self {
        Self {
            hourly_rate: resolve_rate(
                hourly_rate.and_then(parse_strict_prefix),
                DEFAULT_HOURLY_RATE,
                "hourly_rate",
            ),
            error_cost: resolve_rate(
                error_cost.and_then(parse_strict_prefix),
                DEFAULT_ERROR_COST,
                "error_cost",
            ),
            currency_symbol: currency_symbol
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(default_currency_symbol),
        }
    }
}

/// Pick the configured rate if it is a usable non-negative number.
fn resolve_rate(candidate: Option<f64>, default: f64, name: &str) -> f64 {
    match candidate {
        Some(rate) if rate.is_finite() && rate >= 0.0 => rate,
        Some(rate) => {
            log::warn!(
                "Ignoring invalid {} setting {}; using default {}",
                name,
                rate,
                default
            );
            default
        }
        None => default,
    }
}

pub fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

pub fn default_error_cost() -> f64 {
    DEFAULT_ERROR_COST
}

pub fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn deserialize_hourly_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_optional_f64(deserializer)?;
    Ok(resolve_rate(raw, DEFAULT_HOURLY_RATE, "hourly_rate"))
}

fn deserialize_error_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_optional_f64(deserializer)?;
    Ok(resolve_rate(raw, DEFAULT_ERROR_COST, "error_cost"))
}
