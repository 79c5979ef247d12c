//! Prioritized-fallback field resolution over raw backend JSON.
//!
//! The backend has renamed most fields at least once (`basePrice` vs
//! `productPrice`, `attributeValues` vs `values`, `id` vs `valueId`). Every
//! logical field is described by an ordered list of candidate keys; the first
//! candidate holding a usable value wins.

use giftshop_core::Id;
use serde_json::Value;

/// Returns the first candidate key holding a non-null value.
pub(crate) fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find(|value| !value.is_null())
}

/// Returns the first candidate key that resolves to an [`Id`].
pub(crate) fn first_id(raw: &Value, keys: &[&str]) -> Option<Id> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(Id::from_json)
}

/// Returns the first present value as text, or an empty string.
///
/// An empty string at an earlier key still wins; use [`first_nonempty_text`]
/// for labels where blank means "try the next key".
pub(crate) fn first_text(raw: &Value, keys: &[&str]) -> String {
    first_present(raw, keys).map(as_text).unwrap_or_default()
}

/// Returns the first candidate that is non-blank text, or an empty string.
pub(crate) fn first_nonempty_text(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .map(as_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Returns the first string or number value as text, or `None`.
///
/// An empty string is a value, so `Some("")` survives a round trip.
pub(crate) fn first_optional_text(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Returns the first candidate holding an array, or an empty slice.
pub(crate) fn first_list<'a>(raw: &'a Value, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .find_map(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerces a JSON value to a finite number; anything unusable becomes 0.
///
/// Numbers pass through, numeric strings are parsed after trimming.
pub(crate) fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number_text(s),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Parses user- or backend-supplied numeric text. Blank text is `None`.
pub(crate) fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerces to a non-negative price.
pub(crate) fn coerce_price(value: Option<&Value>) -> f64 {
    coerce_number(value).max(0.0)
}

/// Coerces to a non-negative whole count; fractions are truncated.
pub(crate) fn coerce_count(value: Option<&Value>) -> u32 {
    count_from_f64(coerce_number(value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn count_from_f64(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
