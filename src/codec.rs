//! JSON boundary: encoding the map for disk and decoding it back with
//! explicit integer coercion.
//!
//! The file format is a single JSON object, item name to quantity, written
//! with 2-space indentation so it stays hand-editable.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;

/// Encode the inventory map as a pretty-printed JSON object (2-space indent).
pub fn encode(map: &BTreeMap<String, i64>) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(map.len() * 16 + 2);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    map.serialize(&mut ser)?;
    Ok(buf)
}

/// Decode bytes into an inventory map.
///
/// The root must be a JSON object and every key must be non-empty. Values are
/// coerced to `i64` by one explicit rule: JSON integers are taken as-is,
/// floats are accepted only when their fractional part is exactly zero
/// (never truncated), and strings are accepted when they parse as an `i64`
/// after trimming whitespace. Anything else is an [`Error::InvalidFormat`].
pub fn decode(bytes: &[u8]) -> Result<BTreeMap<String, i64>> {
    let root: Value = serde_json::from_slice(bytes)?;
    let obj = match root {
        Value::Object(obj) => obj,
        other => {
            return Err(Error::InvalidFormat(format!(
                "inventory JSON must be an object mapping items to quantities, got {}",
                kind(&other)
            )))
        }
    };

    let mut map = BTreeMap::new();
    for (key, val) in obj {
        if key.is_empty() {
            return Err(Error::InvalidFormat("item names must be non-empty".into()));
        }
        let qty = coerce_quantity(&val).ok_or_else(|| {
            Error::InvalidFormat(format!("quantity for {key:?} is not an integer: {val}"))
        })?;
        map.insert(key, qty);
    }
    Ok(map)
}

fn coerce_quantity(val: &Value) -> Option<i64> {
    match val {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            // Integral floats only; 2.5 is a format error, not 2. The upper
            // bound is exclusive because i64::MAX as f64 rounds up to 2^63,
            // which is one past the largest i64.
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
