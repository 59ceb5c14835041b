//! Lenient numeric coercion for user-entered form values.
//!
//! Every number the engine reads (baselines, targets, stored values, settings
//! and raw intake inputs) goes through these helpers. They never fail: text
//! that cannot be read as a number degrades to `0.0`.
//!
//! Parsing follows form-field semantics: leading whitespace is skipped and the
//! longest numeric prefix is used, so `"12 hours"` reads as `12.0` while
//! `"abc"` reads as `0.0`. Non-finite results are treated as unparseable.

use serde::{Deserialize, Deserializer};

/// Parse `input` as a decimal, degrading to `0.0` on failure.
pub fn parse_lenient(input: &str) -> f64 {
    parse_strict_prefix(input).unwrap_or(0.0)
}

/// Parse the numeric prefix of `input`, returning `None` when there is none.
///
/// Used where "absent" and "zero" must be told apart (settings defaults).
pub fn parse_strict_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return None;
    }
    trimmed[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Map NaN and infinities to `0.0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to the nearest whole currency unit, halves away from zero.
pub fn round_to_unit(value: f64) -> f64 {
    finite_or_zero(value.round())
}

/// Length in bytes of the longest prefix of `s` that reads as a decimal
/// literal: `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least
/// one mantissa digit.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let mut mantissa_digits = pos - int_start;

    if bytes.get(pos) == Some(&b'.') {
        let frac = count_digits(&bytes[pos + 1..]);
        if mantissa_digits > 0 || frac > 0 {
            pos += 1 + frac;
            mantissa_digits += frac;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Any scalar a JSON, YAML or TOML document might hold where a number is
/// expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawScalar {
    fn to_number(&self) -> Option<f64> {
        match self {
            RawScalar::Number(n) if n.is_finite() => Some(*n),
            RawScalar::Number(_) => None,
            RawScalar::Text(s) => parse_strict_prefix(s),
            RawScalar::Other(_) => None,
        }
    }

    fn into_text(self) -> String {
        match self {
            RawScalar::Number(n) => n.to_string(),
            RawScalar::Text(s) => s,
            RawScalar::Other(_) => String::new(),
        }
    }
}

/// Deserialize a number or numeric string, degrading anything else to `0.0`.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScalar::deserialize(deserializer)?;
    Ok(raw.to_number().unwrap_or(0.0))
}

/// Deserialize a number or numeric string, yielding `None` when the value is
/// missing, blank or unparseable.
pub fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScalar::deserialize(deserializer)?;
    Ok(raw.to_number())
}

/// Deserialize decimal-as-text fields, accepting bare numbers as well.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScalar::deserialize(deserializer)?;
    Ok(raw.into_text())
}

/// Inputs accepted by the raw-input estimator: typed numbers or form text.
pub trait NumericInput {
    fn to_lenient_f64(&self) -> f64;
}

impl NumericInput for f64 {
    fn to_lenient_f64(&self) -> f64 {
        finite_or_zero(*self)
    }
}

impl NumericInput for i32 {
    fn to_lenient_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl NumericInput for u32 {
    fn to_lenient_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl NumericInput for str {
    fn to_lenient_f64(&self) -> f64 {
        parse_lenient(self)
    }
}

impl NumericInput for String {
    fn to_lenient_f64(&self) -> f64 {
        parse_lenient(self)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_lenient_f64(&self) -> f64 {
        (**self).to_lenient_f64()
    }
}
