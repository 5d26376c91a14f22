//! Entity encode and decode paths.
//!
//! Modern wire form: `[entityId, componentId, payload, componentId, payload, ...]`
//! with components in registry order. Legacy form, still accepted on read:
//! `[entityId, { propertyName: payload, ... }]`. The shape is detected on
//! every call; there is no stored format version.
//!
//! # Decode policy
//!
//! Structural problems (not an array, bad id, odd pair count, unknown
//! component id, `null` payload outside delta mode) always fail the call. A
//! registered component whose payload does not decode is handled according to
//! [`Trust`]: a tolerant reader logs and drops that one component, while an
//! authoritative reader logs and fails.
//!
//! # Example
//!
//! ```
//! use sylva_ecs::prelude::*;
//! use sylva_ecs::components::{Inventory, Label};
//!
//! let owner = EntityId::from_raw(9);
//! let entity = Entity::new(owner)
//!     .with(Label { text: "me".into() })
//!     .with(Inventory::default());
//!
//! // Someone else only receives public components.
//! let wire = encode_entity(SerializeTarget::client(EntityId::from_raw(2)), &entity, false);
//! let seen = decode_entity(&wire, &DecodeOptions::client()).unwrap();
//! assert!(seen.has(ComponentKind::Label));
//! assert!(!seen.has(ComponentKind::Inventory));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::delta::{ComponentSlots, EntityDelta, Slot};
use crate::entity::{Entity, EntityId};
use crate::registry::{is_deprecated, AnyComponent, ComponentKind};
use crate::visibility::SerializeTarget;
use crate::wire::{integral, kind_of, WireValue};
use crate::{CodecError, FieldError};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How a decoder treats a component whose payload fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trust {
    /// Fail the whole entity. Used where the data is authoritative (server).
    Authoritative,
    /// Drop the component and keep going (client).
    #[default]
    Tolerant,
}

/// Options for [`decode_entity`] and [`decode_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Per-component failure policy.
    pub trust: Trust,
    /// Whether `null` payloads mean "cleared".
    pub delta: bool,
    /// Whether errors carry a copy of the raw payload. Only set this where the
    /// payload may be logged safely.
    pub attach_raw: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trust: Trust::Tolerant,
            delta: false,
            attach_raw: false,
        }
    }
}

impl DecodeOptions {
    /// Authoritative decoding with raw payloads attached to errors.
    pub fn server() -> Self {
        Self {
            trust: Trust::Authoritative,
            delta: false,
            attach_raw: true,
        }
    }

    /// Tolerant decoding without raw payloads.
    pub fn client() -> Self {
        Self::default()
    }

    pub fn with_delta(mut self, delta: bool) -> Self {
        self.delta = delta;
        self
    }

    fn raw(&self, raw: &Value) -> Option<Value> {
        self.attach_raw.then(|| raw.clone())
    }
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode an entity or delta for `target`.
///
/// Components the target may not see are omitted. A cleared slot becomes
/// `[componentId, null]` in delta mode and is omitted otherwise. The output
/// always has odd length.
pub fn encode_entity<E: ComponentSlots>(target: SerializeTarget, entity: &E, delta_mode: bool) -> Value {
    let id = entity.entity_id();
    let mut out = vec![id.to_wire()];
    for (kind, slot) in entity.slots() {
        if !target.can_see(kind, id) {
            continue;
        }
        match slot {
            Slot::Unchanged => {}
            Slot::Cleared => {
                if delta_mode {
                    out.push(Value::from(kind.id()));
                    out.push(Value::Null);
                }
            }
            Slot::Set(component) => {
                out.push(Value::from(kind.id()));
                out.push(component.encode());
            }
        }
    }
    Value::Array(out)
}

/// As [`encode_entity`], passing `None` through.
pub fn encode_optional_entity<E: ComponentSlots>(
    target: SerializeTarget,
    entity: Option<&E>,
    delta_mode: bool,
) -> Option<Value> {
    entity.map(|e| encode_entity(target, e, delta_mode))
}

// ---------------------------------------------------------------------------
// Shape detection
// ---------------------------------------------------------------------------

/// Which wire layout an encoded entity uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// `[id, { name: payload }]`.
    Legacy,
    /// `[id, componentId, payload, ...]`.
    Modern,
}

impl WireShape {
    /// Detect the layout, or `None` when the input is not an array.
    pub fn detect(raw: &Value) -> Option<WireShape> {
        match raw {
            Value::Array(items) if items.len() == 2 && items[1].is_object() => Some(WireShape::Legacy),
            Value::Array(_) => Some(WireShape::Modern),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

type Slots = BTreeMap<ComponentKind, Slot<AnyComponent>>;

/// Decode a snapshot entity. In delta mode, clears are accepted but dropped.
pub fn decode_entity(raw: &Value, options: &DecodeOptions) -> Result<Entity, CodecError> {
    let (id, slots) = decode_slots(raw, options)?;
    let mut entity = Entity::new(id);
    for slot in slots.into_values() {
        if let Slot::Set(component) = slot {
            entity.insert_any(component);
        }
    }
    Ok(entity)
}

/// Decode a delta, keeping clears. `options.delta` selects whether `null`
/// payloads are clears or errors.
pub fn decode_delta(raw: &Value, options: &DecodeOptions) -> Result<EntityDelta, CodecError> {
    let (id, slots) = decode_slots(raw, options)?;
    let mut delta = EntityDelta::new(id);
    for (kind, slot) in slots {
        delta.put(kind, slot);
    }
    Ok(delta)
}

fn decode_slots(raw: &Value, options: &DecodeOptions) -> Result<(EntityId, Slots), CodecError> {
    let shape = WireShape::detect(raw).ok_or_else(|| CodecError::NonObject {
        found: kind_of(raw),
        raw: options.raw(raw),
    })?;
    let items = raw.as_array().map(Vec::as_slice).unwrap_or_default();
    let (id_value, rest) = items.split_first().ok_or_else(|| CodecError::InvalidId {
        raw: options.raw(raw),
    })?;
    let id = EntityId::from_wire(id_value)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or_else(|| CodecError::InvalidId {
            raw: options.raw(raw),
        })?;

    let mut decoder = SlotDecoder {
        id,
        raw,
        options,
        slots: Slots::new(),
    };
    match shape {
        WireShape::Legacy => {
            if let Some(Value::Object(map)) = rest.first() {
                decoder.legacy(map)?;
            }
        }
        WireShape::Modern => decoder.modern(rest)?,
    }
    Ok((id, decoder.slots))
}

/// `false`, `0` and `""` stand for "nothing here" in old writers.
fn is_placeholder(payload: &Value) -> bool {
    match payload {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

struct SlotDecoder<'a> {
    id: EntityId,
    raw: &'a Value,
    options: &'a DecodeOptions,
    slots: Slots,
}

impl SlotDecoder<'_> {
    fn modern(&mut self, rest: &[Value]) -> Result<(), CodecError> {
        if rest.len() % 2 != 0 {
            return Err(CodecError::UnevenData {
                entity_id: self.id,
                remaining: rest.len(),
                raw: self.options.raw(self.raw),
            });
        }
        for pair in rest.chunks_exact(2) {
            let (raw_id, payload) = (&pair[0], &pair[1]);
            let component_id = integral(raw_id)
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| CodecError::InvalidComponentId {
                    entity_id: self.id,
                    value: raw_id.to_string(),
                    raw: self.options.raw(self.raw),
                })?;

            if payload.is_null() && !self.options.delta {
                return Err(CodecError::NullComponent {
                    entity_id: self.id,
                    component_id,
                    raw: self.options.raw(self.raw),
                });
            }
            if is_placeholder(payload) {
                continue;
            }

            let Some(kind) = ComponentKind::from_id(component_id) else {
                if is_deprecated(component_id) {
                    tracing::debug!(
                        entity_id = %self.id,
                        component_id,
                        "skipping deprecated component"
                    );
                    continue;
                }
                return Err(CodecError::UnknownComponent {
                    entity_id: self.id,
                    component_id,
                    raw: self.options.raw(self.raw),
                });
            };

            if payload.is_null() {
                self.slots.insert(kind, Slot::Cleared);
                continue;
            }
            self.component(kind, payload)?;
        }
        Ok(())
    }

    fn legacy(&mut self, map: &serde_json::Map<String, Value>) -> Result<(), CodecError> {
        for (name, payload) in map {
            let Some(kind) = ComponentKind::from_name(name) else {
                tracing::debug!(entity_id = %self.id, property = %name, "skipping unknown legacy property");
                continue;
            };
            if payload.is_null() {
                if self.options.delta {
                    self.slots.insert(kind, Slot::Cleared);
                }
                continue;
            }
            self.component(kind, payload)?;
        }
        Ok(())
    }

    fn component(&mut self, kind: ComponentKind, payload: &Value) -> Result<(), CodecError> {
        match (kind.entry().decode)(payload) {
            Ok(component) => {
                self.slots.insert(kind, Slot::Set(component));
                Ok(())
            }
            Err(error) => self.failed(kind, error),
        }
    }

    fn failed(&self, kind: ComponentKind, error: FieldError) -> Result<(), CodecError> {
        match self.options.trust {
            Trust::Authoritative => {
                tracing::error!(
                    entity_id = %self.id,
                    component_id = kind.id(),
                    component = kind.name(),
                    error = %error,
                    "failed to decode component"
                );
                Err(CodecError::Component {
                    entity_id: self.id,
                    component_id: kind.id(),
                    name: kind.name(),
                    source: error,
                    raw: self.options.raw(self.raw),
                })
            }
            Trust::Tolerant => {
                tracing::warn!(
                    entity_id = %self.id,
                    component_id = kind.id(),
                    component = kind.name(),
                    error = %error,
                    "dropping component that failed to decode"
                );
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
