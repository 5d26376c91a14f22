//! Entity deltas and the three-state component slot.
//!
//! A snapshot [`Entity`] only knows "present" and "absent". A mutation needs a
//! third state: "explicitly removed". [`Slot`] models all three, and
//! [`EntityDelta`] stores one slot per touched component.

use std::collections::BTreeMap;

use crate::entity::{Entity, EntityId};
use crate::registry::{AnyComponent, Component, ComponentKind};

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// State of one component slot relative to a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot<T> {
    /// Not part of the mutation.
    #[default]
    Unchanged,
    /// Removed by the mutation.
    Cleared,
    /// Inserted or replaced by the mutation.
    Set(T),
}

impl<T> Slot<T> {
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Unchanged => Slot::Unchanged,
            Slot::Cleared => Slot::Cleared,
            Slot::Set(v) => Slot::Set(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Slot::Unchanged => Slot::Unchanged,
            Slot::Cleared => Slot::Cleared,
            Slot::Set(v) => Slot::Set(f(v)),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Slot::Unchanged)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Slot::Cleared)
    }

    /// The set value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Slot::Set(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ComponentSlots
// ---------------------------------------------------------------------------

/// Anything the entity encoder can walk: an id plus per-component slots.
pub trait ComponentSlots {
    fn entity_id(&self) -> EntityId;

    /// Non-`Unchanged` slots in registry order.
    fn slots(&self) -> impl Iterator<Item = (ComponentKind, Slot<&AnyComponent>)> + '_;
}

impl ComponentSlots for Entity {
    fn entity_id(&self) -> EntityId {
        self.id()
    }

    fn slots(&self) -> impl Iterator<Item = (ComponentKind, Slot<&AnyComponent>)> + '_ {
        self.components().map(|c| (c.kind(), Slot::Set(c)))
    }
}

// ---------------------------------------------------------------------------
// EntityDelta
// ---------------------------------------------------------------------------

/// A partial update to one entity.
///
/// Never stores [`Slot::Unchanged`]; untouched components have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDelta {
    id: EntityId,
    slots: BTreeMap<ComponentKind, Slot<AnyComponent>>,
}

impl EntityDelta {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            slots: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Typed view of one slot.
    pub fn slot<C: Component>(&self) -> Slot<&C> {
        match self.slots.get(&C::KIND) {
            None => Slot::Unchanged,
            Some(Slot::Set(any)) => C::from_any(any).map_or(Slot::Unchanged, Slot::Set),
            Some(Slot::Cleared) => Slot::Cleared,
            Some(Slot::Unchanged) => Slot::Unchanged,
        }
    }

    pub fn slot_of(&self, kind: ComponentKind) -> Slot<&AnyComponent> {
        self.slots.get(&kind).map_or(Slot::Unchanged, Slot::as_ref)
    }

    /// Upsert a component.
    pub fn set<C: Component>(&mut self, component: C) -> &mut Self {
        self.slots.insert(C::KIND, Slot::Set(component.into_any()));
        self
    }

    pub fn set_any(&mut self, component: AnyComponent) -> &mut Self {
        self.slots.insert(component.kind(), Slot::Set(component));
        self
    }

    /// Mark a component as removed.
    pub fn clear(&mut self, kind: ComponentKind) -> &mut Self {
        self.slots.insert(kind, Slot::Cleared);
        self
    }

    /// Drop a component from the mutation.
    pub fn reset(&mut self, kind: ComponentKind) -> &mut Self {
        self.slots.remove(&kind);
        self
    }

    /// Write a slot. A set component is filed under its own kind.
    pub fn put(&mut self, kind: ComponentKind, slot: Slot<AnyComponent>) -> &mut Self {
        match slot {
            Slot::Unchanged => self.reset(kind),
            Slot::Cleared => self.clear(kind),
            Slot::Set(component) => self.set_any(component),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Apply to an entity: set upserts, cleared removes.
    pub fn apply_to(&self, entity: &mut Entity) {
        for (kind, slot) in &self.slots {
            match slot {
                Slot::Set(component) => {
                    entity.insert_any(component.clone());
                }
                Slot::Cleared => {
                    entity.remove_kind(*kind);
                }
                Slot::Unchanged => {}
            }
        }
    }

    /// Fold a newer delta into this one; the newer slot wins where present.
    pub fn merge(&mut self, newer: EntityDelta) {
        self.slots.extend(newer.slots);
    }

    /// Keep only set components.
    pub fn into_entity(self) -> Entity {
        let mut entity = Entity::new(self.id);
        for slot in self.slots.into_values() {
            if let Slot::Set(component) = slot {
                entity.insert_any(component);
            }
        }
        entity
    }
}

impl From<Entity> for EntityDelta {
    fn from(entity: Entity) -> Self {
        let mut delta = EntityDelta::new(entity.id());
        for component in entity.components() {
            delta.set_any(component.clone());
        }
        delta
    }
}

impl ComponentSlots for EntityDelta {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn slots(&self) -> impl Iterator<Item = (ComponentKind, Slot<&AnyComponent>)> + '_ {
        self.slots.iter().map(|(kind, slot)| (*kind, slot.as_ref()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
