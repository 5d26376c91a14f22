//! Sparse, tag-addressed component field codec.
//!
//! Each component field carries a permanent positive tag. On the wire a
//! component is an array where the value for tag `t` sits at index `t - 1`;
//! fields without a value are holes (`null`), and trailing holes are trimmed.
//! Tags are never reused, so removed fields simply leave a gap.
//!
//! Decoding also accepts the legacy keyed-object form, where keys are either
//! the numeric tag or the field name. Unknown tags and names are skipped, and
//! missing fields take their type's default.
//!
//! Components are declared with [`component!`](crate::component), which
//! generates the struct and its [`ComponentFields`] impl from a tag list:
//!
//! ```
//! use sylva_ecs::component;
//! use sylva_ecs::fields::ComponentFields;
//!
//! component! {
//!     /// A test component.
//!     pub struct Marker {
//!         1 => label: String,
//!         3 => weight = "weightKg": Option<f64>,
//!     }
//! }
//!
//! let m = Marker { label: "x".into(), weight: None };
//! assert_eq!(m.encode(), serde_json::json!(["x"]));
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::wire::{kind_of, WireValue};
use crate::FieldError;

/// One declared field: permanent tag plus its property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub tag: u16,
    pub name: &'static str,
}

// ---------------------------------------------------------------------------
// SparseFields
// ---------------------------------------------------------------------------

/// Tag-indexed raw field values for one component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseFields {
    values: BTreeMap<u16, Value>,
}

impl SparseFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field. Values encoding to `null` are left out.
    pub fn put<T: WireValue>(&mut self, tag: u16, value: &T) {
        let wire = value.to_wire();
        if !wire.is_null() {
            self.values.insert(tag, wire);
        }
    }

    /// Read a field, defaulting when absent.
    pub fn get<T: WireValue + Default>(&self, tag: u16, name: &'static str) -> Result<T, FieldError> {
        match self.values.get(&tag) {
            None => Ok(T::default()),
            Some(raw) => T::from_wire(raw).map_err(|source| FieldError::InField {
                tag,
                name,
                source: Box::new(source),
            }),
        }
    }

    pub fn raw(&self, tag: u16) -> Option<&Value> {
        self.values.get(&tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as a sparse array with `null` holes.
    pub fn into_wire(self) -> Value {
        let len = self
            .values
            .keys()
            .next_back()
            .map_or(0, |&tag| usize::from(tag));
        let mut out = vec![Value::Null; len];
        for (tag, value) in self.values {
            if let Some(slot) = usize::from(tag).checked_sub(1).and_then(|i| out.get_mut(i)) {
                *slot = value;
            }
        }
        Value::Array(out)
    }

    /// Parse array or keyed-object form, keeping only declared tags.
    pub fn from_wire(data: &Value, fields: &[FieldSpec]) -> Result<Self, FieldError> {
        let declared = |tag: u16| fields.iter().any(|f| f.tag == tag);
        let mut values = BTreeMap::new();
        match data {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let Ok(tag) = u16::try_from(index + 1) else {
                        break;
                    };
                    if !item.is_null() && declared(tag) {
                        values.insert(tag, item.clone());
                    }
                }
            }
            Value::Object(map) => {
                // Names first, so an explicit numeric key for the same field wins.
                for (key, item) in map {
                    if let Some(spec) = fields.iter().find(|f| f.name == key) {
                        if !item.is_null() {
                            values.insert(spec.tag, item.clone());
                        }
                    }
                }
                for (key, item) in map {
                    if let Ok(tag) = key.parse::<u16>() {
                        if !item.is_null() && declared(tag) {
                            values.insert(tag, item.clone());
                        }
                    }
                }
            }
            other => {
                return Err(FieldError::NotAContainer {
                    found: kind_of(other),
                })
            }
        }
        Ok(Self { values })
    }
}

// ---------------------------------------------------------------------------
// ComponentFields
// ---------------------------------------------------------------------------

/// A record with a sparse tagged wire form.
pub trait ComponentFields: Sized + Default {
    /// Declared fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    fn encode_fields(&self) -> SparseFields;

    fn decode_fields(fields: &SparseFields) -> Result<Self, FieldError>;

    /// Encode to the sparse array form.
    fn encode(&self) -> Value {
        self.encode_fields().into_wire()
    }

    /// Decode from either the array or the keyed-object form.
    fn decode(data: &Value) -> Result<Self, FieldError> {
        Self::decode_fields(&SparseFields::from_wire(data, Self::FIELDS)?)
    }

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}

/// Declare a component struct with permanent field tags.
///
/// Each field is `tag => name: Type`, or `tag => name = "wireName": Type` when
/// the property name differs from the Rust identifier.
#[macro_export]
macro_rules! component {
    (@name $field:ident) => { stringify!($field) };
    (@name $field:ident $wire:literal) => { $wire };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $tag:literal => $field:ident $(= $wire:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $crate::fields::ComponentFields for $name {
            const FIELDS: &'static [$crate::fields::FieldSpec] = &[
                $( $crate::fields::FieldSpec {
                    tag: $tag,
                    name: $crate::component!(@name $field $($wire)?),
                }, )*
            ];

            #[allow(unused_mut)]
            fn encode_fields(&self) -> $crate::fields::SparseFields {
                let mut out = $crate::fields::SparseFields::new();
                $( out.put($tag, &self.$field); )*
                out
            }

            #[allow(unused_variables)]
            fn decode_fields(
                fields: &$crate::fields::SparseFields,
            ) -> ::std::result::Result<Self, $crate::FieldError> {
                Ok(Self {
                    $( $field: fields.get($tag, $crate::component!(@name $field $($wire)?))?, )*
                })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
