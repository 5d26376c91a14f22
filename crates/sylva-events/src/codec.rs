//! Event encode/decode.

use serde_json::{Map, Value};
use tracing::debug;

use sylva_ecs::wire::{kind_of, WireValue};

use crate::event::Event;
use crate::EventError;

/// Key carrying the event discriminator.
pub const KIND_KEY: &str = "kind";

/// A payload struct with a fixed `kind` and named wire fields.
///
/// Implemented by the `events!` declarations in [`crate::event`].
pub trait EventPayload: Sized + Default {
    const KIND: &'static str;

    /// Append every non-null field to `out`.
    fn encode_fields(&self, out: &mut Map<String, Value>);

    /// Read the fields back; absent or null fields take their defaults and
    /// unknown keys are ignored.
    fn decode_fields(map: &Map<String, Value>) -> Result<Self, EventError>;
}

pub(crate) fn put_field<T: WireValue>(out: &mut Map<String, Value>, name: &str, value: &T) {
    let value = value.to_wire();
    if !value.is_null() {
        out.insert(name.to_owned(), value);
    }
}

pub(crate) fn get_field<T: WireValue + Default>(
    map: &Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<T, EventError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(raw) => T::from_wire(raw).map_err(|source| EventError::Field {
            kind,
            field,
            source,
        }),
    }
}

/// Encode an event as `{"kind": ..., field: value, ...}`.
pub fn encode_event(event: &Event) -> Value {
    let mut out = Map::new();
    out.insert(KIND_KEY.to_owned(), Value::from(event.kind()));
    event.encode_fields(&mut out);
    Value::Object(out)
}

/// Decode an event by dispatching on its `kind`.
pub fn decode_event(raw: &Value) -> Result<Event, EventError> {
    let Value::Object(map) = raw else {
        return Err(EventError::NotAnObject {
            found: kind_of(raw),
        });
    };
    let kind = map
        .get(KIND_KEY)
        .and_then(Value::as_str)
        .ok_or(EventError::MissingKind)?;
    Event::decode_kind(kind, map).unwrap_or_else(|| {
        debug!(kind, "rejecting unknown event kind");
        Err(EventError::UnknownKind {
            kind: kind.to_owned(),
        })
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
