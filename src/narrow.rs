//! Narrowing: tagged `Value` → one expected Rust type, or a [`JsonError`].
//!
//! Shared by both views so the key-indexed and position-indexed accessors
//! apply the exact same type rules.

use serde_json::{Map, Number, Value};

use crate::datetime::{self, DateTime};
use crate::error::{Expected, JsonError, Location, Result};
use crate::tag::Tag;

fn mismatch(expected: Expected, at: &Location, v: &Value) -> JsonError {
    JsonError::TypeMismatch { expected, at: at.clone(), found: Tag::of(v) }
}

// ------------------------------- Readers ---------------------------------- //

pub(crate) fn string<'a>(v: &'a Value, at: &Location) -> Result<&'a str> {
    v.as_str().ok_or_else(|| mismatch(Expected::String, at, v))
}

pub(crate) fn number(v: &Value, at: &Location) -> Result<f64> {
    match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| mismatch(Expected::Number, at, v)),
        _ => Err(mismatch(Expected::Number, at, v)),
    }
}

pub(crate) fn boolean(v: &Value, at: &Location) -> Result<bool> {
    v.as_bool().ok_or_else(|| mismatch(Expected::Boolean, at, v))
}

pub(crate) fn object<'a>(v: &'a Value, at: &Location) -> Result<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| mismatch(Expected::Object, at, v))
}

pub(crate) fn array<'a>(v: &'a Value, at: &Location) -> Result<&'a Vec<Value>> {
    v.as_array().ok_or_else(|| mismatch(Expected::Array, at, v))
}

/// A number is an integer when it survives truncation to `i64` unchanged.
///
/// Non-numbers report `number` as the expected type, matching what a caller
/// would get from [`number`] first.
pub(crate) fn integer(v: &Value, at: &Location) -> Result<i64> {
    if let Value::Number(n) = v {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
    }
    let d = number(v, at)?;
    // 2^63 is the first f64 past i64::MAX; `as` would saturate onto it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !(-LIMIT..LIMIT).contains(&d) {
        return Err(mismatch(Expected::Integer, at, v));
    }
    let i = d as i64;
    if i as f64 != d {
        return Err(mismatch(Expected::Integer, at, v));
    }
    Ok(i)
}

pub(crate) fn n_string<'a>(v: &'a Value, at: &Location) -> Result<Option<&'a str>> {
    if v.is_null() {
        return Ok(None);
    }
    string(v, at).map(Some)
}

/// `Ok(None)` when the string is present but not a valid ISO-8601 timestamp.
pub(crate) fn date_time(v: &Value, at: &Location) -> Result<Option<DateTime>> {
    string(v, at).map(datetime::parse_iso8601)
}

pub(crate) fn n_date_time(v: &Value, at: &Location) -> Result<Option<DateTime>> {
    if v.is_null() {
        return Ok(None);
    }
    date_time(v, at)
}

// ------------------------------- Writers ---------------------------------- //

/// NaN and the infinities have no JSON spelling; they are stored as null.
pub(crate) fn number_value(d: f64) -> Value {
    Number::from_f64(d).map(Value::Number).unwrap_or(Value::Null)
}

pub(crate) fn n_string_value(s: Option<&str>) -> Value {
    match s {
        Some(s) => Value::String(s.to_owned()),
        None => Value::Null,
    }
}

pub(crate) fn date_time_value(dt: &DateTime) -> Value {
    Value::String(datetime::format_iso8601(dt))
}

pub(crate) fn n_date_time_value(dt: Option<&DateTime>) -> Value {
    dt.map(date_time_value).unwrap_or(Value::Null)
}
