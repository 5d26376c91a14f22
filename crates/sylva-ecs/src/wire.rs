//! Primitive wire values.
//!
//! Every component field and event field goes through [`WireValue`], which
//! maps a typed value onto a [`serde_json::Value`] and back. Encoding is total
//! and deterministic; decoding reports a [`FieldError`] naming the expected
//! kind.
//!
//! Conventions:
//!
//! - `null` means "no value". `Option<T>` maps `None` to `null`, and the
//!   sparse field codec drops `null` fields entirely.
//! - 64-bit integers are written as decimal strings so they survive readers
//!   that parse numbers as doubles. They are read back from a string or from
//!   an integral number.
//! - Maps are arrays of `[key, value]` pairs and sets are arrays, both in key
//!   order.
//! - Byte buffers are lowercase hex strings.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::{Number, Value};

use crate::FieldError;

// ---------------------------------------------------------------------------
// WireValue
// ---------------------------------------------------------------------------

/// A value with a JSON wire representation.
pub trait WireValue: Sized {
    /// Encode to the wire form. `Value::Null` means "no value".
    fn to_wire(&self) -> Value;

    /// Decode from the wire form.
    fn from_wire(value: &Value) -> Result<Self, FieldError>;
}

/// Short name of a JSON value's kind, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(expected: &'static str, found: &Value) -> FieldError {
    FieldError::TypeMismatch {
        expected,
        found: kind_of(found),
    }
}

/// Integer view of a JSON number. Integral floats such as `3.0` are accepted.
pub(crate) fn integral(value: &Value) -> Option<i128> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    let f = n.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 1.8e19).then_some(f as i128)
}

fn elements<'a>(value: &'a Value, expected: &'static str) -> Result<&'a [Value], FieldError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(mismatch(expected, other)),
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl WireValue for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

macro_rules! wire_integer {
    ($($ty:ty => $label:literal),* $(,)?) => {$(
        impl WireValue for $ty {
            fn to_wire(&self) -> Value {
                Value::from(*self)
            }

            fn from_wire(value: &Value) -> Result<Self, FieldError> {
                let wide = integral(value).ok_or_else(|| mismatch($label, value))?;
                <$ty>::try_from(wide).map_err(|_| FieldError::OutOfRange {
                    expected: $label,
                    value: wide.to_string(),
                })
            }
        }
    )*};
}

wire_integer!(u8 => "u8", u16 => "u16", u32 => "u32", i32 => "i32");

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

macro_rules! wire_bigint {
    ($($ty:ty => $label:literal),* $(,)?) => {$(
        impl WireValue for $ty {
            fn to_wire(&self) -> Value {
                Value::String(self.to_string())
            }

            fn from_wire(value: &Value) -> Result<Self, FieldError> {
                let wide = match value {
                    Value::String(s) if is_decimal(s) => {
                        s.parse::<i128>().map_err(|e| FieldError::Malformed {
                            expected: $label,
                            details: e.to_string(),
                        })?
                    }
                    Value::String(s) => {
                        return Err(FieldError::Malformed {
                            expected: $label,
                            details: format!("{s:?} is not a decimal integer"),
                        })
                    }
                    other => integral(other).ok_or_else(|| mismatch($label, other))?,
                };
                <$ty>::try_from(wide).map_err(|_| FieldError::OutOfRange {
                    expected: $label,
                    value: wide.to_string(),
                })
            }
        }
    )*};
}

wire_bigint!(u64 => "u64", i64 => "i64");

impl WireValue for f64 {
    /// Non-finite values have no JSON form and encode as "no value".
    fn to_wire(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        value.as_f64().ok_or_else(|| mismatch("f64", value))
    }
}

impl WireValue for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value))
    }
}

/// Opaque passthrough for state owned by another subsystem.
impl WireValue for Value {
    fn to_wire(&self) -> Value {
        self.clone()
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        Ok(value.clone())
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

impl<T: WireValue> WireValue for Option<T> {
    fn to_wire(&self) -> Value {
        self.as_ref().map_or(Value::Null, WireValue::to_wire)
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        elements(value, "list")?.iter().map(T::from_wire).collect()
    }
}

/// Fixed-size vectors (`Vec3f`, `Vec2f`, `Vec3i`). Extra trailing elements are
/// ignored; missing ones are an error.
impl<T: WireValue + Default + Copy, const N: usize> WireValue for [T; N] {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        let items = elements(value, "vector")?;
        if items.len() < N {
            return Err(FieldError::Malformed {
                expected: "vector",
                details: format!("expected {N} elements, found {}", items.len()),
            });
        }
        let mut out = [T::default(); N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = T::from_wire(item)?;
        }
        Ok(out)
    }
}

impl<T: WireValue + Ord> WireValue for BTreeSet<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        elements(value, "set")?.iter().map(T::from_wire).collect()
    }
}

impl<K: WireValue + Ord, V: WireValue> WireValue for BTreeMap<K, V> {
    fn to_wire(&self) -> Value {
        Value::Array(
            self.iter()
                .map(|(k, v)| Value::Array(vec![k.to_wire(), v.to_wire()]))
                .collect(),
        )
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        elements(value, "map")?
            .iter()
            .map(|entry| match entry.as_array().map(Vec::as_slice) {
                Some([k, v]) => Ok((K::from_wire(k)?, V::from_wire(v)?)),
                _ => Err(FieldError::Malformed {
                    expected: "map",
                    details: "entries must be [key, value] pairs".into(),
                }),
            })
            .collect()
    }
}

/// Two-element tuples (`TerrainUpdate`, inventory assignments) as `[a, b]`.
impl<A: WireValue, B: WireValue> WireValue for (A, B) {
    fn to_wire(&self) -> Value {
        Value::Array(vec![self.0.to_wire(), self.1.to_wire()])
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        match elements(value, "pair")? {
            [a, b] => Ok((A::from_wire(a)?, B::from_wire(b)?)),
            items => Err(FieldError::Malformed {
                expected: "pair",
                details: format!("expected 2 elements, found {}", items.len()),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// An opaque byte blob (shard data, NPC state, occupancy grids).
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({})", self.to_hex())
    }
}

impl WireValue for Buffer {
    fn to_wire(&self) -> Value {
        Value::String(self.to_hex())
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        let hex = value.as_str().ok_or_else(|| mismatch("buffer", value))?;
        if hex.len() % 2 != 0 {
            return Err(FieldError::Malformed {
                expected: "buffer",
                details: format!("odd hex length {}", hex.len()),
            });
        }
        hex.as_bytes()
            .chunks_exact(2)
            .map(|pair| {
                std::str::from_utf8(pair)
                    .ok()
                    .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                    .ok_or_else(|| FieldError::Malformed {
                        expected: "buffer",
                        details: "non-hex digit".into(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Buffer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
