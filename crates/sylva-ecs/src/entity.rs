//! Entity identifiers and the snapshot entity model.
//!
//! An [`EntityId`] is a globally unique, strictly positive 64-bit integer. An
//! [`Entity`] pairs an id with a sparse set of components keyed by
//! [`ComponentKind`]; iteration follows registry order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{AnyComponent, Component, ComponentKind};
use crate::wire::{integral, mismatch, WireValue};
use crate::FieldError;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// A globally unique entity identifier.
///
/// Zero is the "unset" value used as the default for id-typed component
/// fields; it is never a valid id for an entity itself.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// The unset id.
    pub const INVALID: EntityId = EntityId(0);

    /// Construct an id, rejecting zero.
    #[inline]
    pub fn new(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// Raw `u64` representation.
    #[inline]
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Reconstruct from a raw `u64` without validation.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Whether the id may identify an entity (non-zero).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ids travel as plain JSON numbers. Numeric strings are accepted on read.
impl WireValue for EntityId {
    fn to_wire(&self) -> Value {
        Value::from(self.0)
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        let wide = match value {
            Value::String(s) => s.parse::<i128>().map_err(|_| FieldError::Malformed {
                expected: "entity id",
                details: format!("{s:?} is not an integer"),
            })?,
            other => integral(other).ok_or_else(|| mismatch("entity id", other))?,
        };
        u64::try_from(wide)
            .map(EntityId)
            .map_err(|_| FieldError::OutOfRange {
                expected: "entity id",
                value: wide.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A full entity snapshot: an id plus whichever components are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    components: BTreeMap<ComponentKind, AnyComponent>,
}

impl Entity {
    /// An entity with no components.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            components: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Builder-style insert.
    pub fn with<C: Component>(mut self, component: C) -> Self {
        self.insert(component);
        self
    }

    /// Insert or replace a component, returning the previous value.
    pub fn insert<C: Component>(&mut self, component: C) -> Option<AnyComponent> {
        self.components.insert(C::KIND, component.into_any())
    }

    /// Insert or replace a type-erased component.
    pub fn insert_any(&mut self, component: AnyComponent) -> Option<AnyComponent> {
        self.components.insert(component.kind(), component)
    }

    pub fn get<C: Component>(&self) -> Option<&C> {
        self.components.get(&C::KIND).and_then(C::from_any)
    }

    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components.get_mut(&C::KIND).and_then(C::from_any_mut)
    }

    pub fn get_any(&self, kind: ComponentKind) -> Option<&AnyComponent> {
        self.components.get(&kind)
    }

    /// Remove a component by type.
    pub fn remove<C: Component>(&mut self) -> Option<C> {
        self.components
            .remove(&C::KIND)
            .and_then(|any| C::try_from_any(any).ok())
    }

    pub fn remove_kind(&mut self, kind: ComponentKind) -> Option<AnyComponent> {
        self.components.remove(&kind)
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Whether every listed component is present (archetype checks).
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|k| self.has(*k))
    }

    /// Components in registry order.
    pub fn components(&self) -> impl Iterator<Item = &AnyComponent> + '_ {
        self.components.values()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Label, Position, RemoteConnection};
    use serde_json::json;

    #[test]
    fn new_rejects_zero() {
        assert_eq!(EntityId::new(0), None);
        assert_eq!(EntityId::new(9).map(EntityId::to_raw), Some(9));
        assert!(!EntityId::default().is_valid());
    }

    #[test]
    fn wire_accepts_numbers_and_numeric_strings() {
        assert_eq!(EntityId::from_wire(&json!(77)).unwrap(), EntityId(77));
        assert_eq!(EntityId::from_wire(&json!("77")).unwrap(), EntityId(77));
        assert!(EntityId::from_wire(&json!(-1)).is_err());
        assert!(EntityId::from_wire(&json!("x")).is_err());
        assert_eq!(EntityId(77).to_wire(), json!(77));
    }

    #[test]
    fn typed_access() {
        let mut e = Entity::new(EntityId(3))
            .with(Label { text: "a".into() })
            .with(RemoteConnection {});
        assert_eq!(e.get::<Label>().map(|l| l.text.as_str()), Some("a"));
        assert!(e.get::<Position>().is_none());

        e.get_mut::<Label>().unwrap().text.push('b');
        assert_eq!(e.remove::<Label>().unwrap().text, "ab");
        assert!(!e.has(ComponentKind::Label));
        assert!(e.has_all(&[ComponentKind::RemoteConnection]));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn components_iterate_in_registry_order() {
        let e = Entity::new(EntityId(3))
            .with(Label { text: "a".into() })
            .with(Position::default())
            .with(RemoteConnection {});
        let kinds: Vec<_> = e.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::RemoteConnection,
                ComponentKind::Position,
                ComponentKind::Label
            ]
        );
    }
}
