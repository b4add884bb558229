//! Money-unit conversion for Fiken payloads.
//!
//! The Fiken API stores every monetary value as an integer number of øre.
//! Agents read and write kroner. This module walks arbitrary JSON documents
//! and rewrites the numbers that sit under monetary field names, in either
//! direction, without knowing anything about the endpoint schema.

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Field names that always hold an amount in minor units.
const MONEY_FIELDS: &[&str] = &[
    "net",
    "gross",
    "vat",
    "amount",
    "unitPrice",
    "balance",
    "paid",
    "outstanding",
    "netInNok",
    "grossInNok",
    "vatInNok",
];

/// Any key ending with this suffix is treated as an amount too.
const MONEY_SUFFIX: &str = "Amount";

const MINOR_PER_MAJOR: f64 = 100.0;

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// øre → kroner (API response → agent).
    ToMajor,
    /// kroner → øre (agent → API request).
    ToMinor,
}

/// Returns true if a JSON key names a monetary value.
///
/// Purely syntactic: exact match against the known field list, or a
/// case-sensitive `Amount` suffix.
pub fn is_money_field(name: &str) -> bool {
    MONEY_FIELDS.contains(&name) || name.ends_with(MONEY_SUFFIX)
}

/// Converts monetary fields from øre to kroner.
///
/// Input that is not valid JSON is returned unchanged.
pub fn to_major_units(data: &[u8]) -> Cow<'_, [u8]> {
    convert_bytes(data, Direction::ToMajor)
}

/// Converts monetary fields from kroner to øre, rounding to whole øre.
///
/// Input that is not valid JSON is returned unchanged.
pub fn to_minor_units(data: &[u8]) -> Cow<'_, [u8]> {
    convert_bytes(data, Direction::ToMinor)
}

/// Rewrites every monetary number in `value`.
///
/// Top-level scalars have no field name and are never touched.
pub fn convert_value(value: Value, direction: Direction) -> Value {
    convert_under(value, None, direction)
}

fn convert_bytes(data: &[u8], direction: Direction) -> Cow<'_, [u8]> {
    let Ok(parsed) = serde_json::from_slice::<Value>(data) else {
        return Cow::Borrowed(data);
    };

    match serde_json::to_vec(&convert_value(parsed, direction)) {
        Ok(converted) => Cow::Owned(converted),
        Err(_) => Cow::Borrowed(data),
    }
}

/// Walks `value`, where `field` is the key it was found under.
///
/// Array elements inherit the array's own key, so `"amount": [1000, 2000]`
/// converts both elements.
fn convert_under(value: Value, field: Option<&str>, direction: Direction) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| {
                    let converted = convert_under(inner, Some(&key), direction);
                    (key, converted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_under(item, field, direction))
                .collect(),
        ),
        Value::Number(number) if field.is_some_and(is_money_field) => {
            Value::Number(convert_number(number, direction))
        }
        other => other,
    }
}

fn convert_number(number: Number, direction: Direction) -> Number {
    let Some(value) = number.as_f64() else {
        return number;
    };

    match direction {
        Direction::ToMajor => Number::from_f64(value / MINOR_PER_MAJOR).unwrap_or(number),
        // f64::round is half away from zero; i64 keeps the output an integer literal.
        Direction::ToMinor => Number::from((value * MINOR_PER_MAJOR).round() as i64),
    }
}
