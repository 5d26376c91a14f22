//! Entity changes: create, update and delete, with merge and apply.
//!
//! A [`Change`] is what a writer proposes for one entity at one tick. Pending
//! changes for the same entity are folded together with [`merge_change`] and
//! applied to a stored entity with [`apply_change`].
//!
//! Wire form is a keyed object:
//!
//! ```text
//! {"kind": "create", "tick": 23, "entity": [id, ...]}
//! {"kind": "update", "tick": 25, "entity": [id, ...delta...]}
//! {"kind": "delete", "tick": 28, "id": id}
//! ```
//!
//! `tick` is omitted when unknown. Updates are always encoded and decoded in
//! delta mode so clears survive the round trip.

use serde_json::{Map, Value};

use crate::codec::{decode_delta, decode_entity, encode_entity, DecodeOptions};
use crate::delta::EntityDelta;
use crate::entity::{Entity, EntityId};
use crate::visibility::SerializeTarget;
use crate::wire::{kind_of, WireValue};
use crate::ChangeError;

/// A proposed mutation of one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Replace the entity wholesale.
    Create { tick: Option<u64>, entity: Entity },
    /// Patch the entity.
    Update { tick: Option<u64>, delta: EntityDelta },
    /// Remove the entity.
    Delete { tick: Option<u64>, id: EntityId },
}

impl Change {
    /// The affected entity.
    pub fn id(&self) -> EntityId {
        match self {
            Change::Create { entity, .. } => entity.id(),
            Change::Update { delta, .. } => delta.id(),
            Change::Delete { id, .. } => *id,
        }
    }

    pub fn tick(&self) -> Option<u64> {
        match self {
            Change::Create { tick, .. } | Change::Update { tick, .. } | Change::Delete { tick, .. } => *tick,
        }
    }

    /// Wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Change::Create { .. } => "create",
            Change::Update { .. } => "update",
            Change::Delete { .. } => "delete",
        }
    }
}

// ---------------------------------------------------------------------------
// Merge / apply
// ---------------------------------------------------------------------------

/// Fold `newer` onto a pending change for the same entity.
///
/// Creates and deletes replace whatever was pending. An update onto a delete
/// stands alone; onto an update, the two deltas merge slot by slot with the
/// newer tick; onto a create, it is applied to the created entity unless it
/// is strictly older than the create.
pub fn merge_change(older: Option<Change>, newer: Change) -> Change {
    let Some(older) = older else {
        return newer;
    };
    match (older, newer) {
        (_, newer @ (Change::Create { .. } | Change::Delete { .. })) => newer,
        (Change::Delete { .. }, newer @ Change::Update { .. }) => newer,
        (Change::Update { delta: mut merged, .. }, Change::Update { tick, delta }) => {
            merged.merge(delta);
            Change::Update { tick, delta: merged }
        }
        (
            Change::Create {
                tick: created_at,
                mut entity,
            },
            Change::Update { tick, delta },
        ) => {
            if matches!((tick, created_at), (Some(t), Some(c)) if t < c) {
                Change::Create {
                    tick: created_at,
                    entity,
                }
            } else {
                delta.apply_to(&mut entity);
                Change::Create { tick, entity }
            }
        }
    }
}

/// Apply a change to the stored entity, if any.
pub fn apply_change(entity: Option<Entity>, change: &Change) -> Option<Entity> {
    match change {
        Change::Create { entity, .. } => Some(entity.clone()),
        Change::Update { delta, .. } => {
            let mut entity = entity.unwrap_or_else(|| Entity::new(delta.id()));
            delta.apply_to(&mut entity);
            Some(entity)
        }
        Change::Delete { .. } => None,
    }
}

// ---------------------------------------------------------------------------
// Wire
// ---------------------------------------------------------------------------

pub fn encode_change(target: SerializeTarget, change: &Change) -> Value {
    let mut out = Map::new();
    out.insert("kind".into(), Value::from(change.kind()));
    if let Some(tick) = change.tick() {
        out.insert("tick".into(), tick.to_wire());
    }
    match change {
        Change::Create { entity, .. } => {
            out.insert("entity".into(), encode_entity(target, entity, false));
        }
        Change::Update { delta, .. } => {
            out.insert("entity".into(), encode_entity(target, delta, true));
        }
        Change::Delete { id, .. } => {
            out.insert("id".into(), id.to_wire());
        }
    }
    Value::Object(out)
}

pub fn decode_change(raw: &Value, options: &DecodeOptions) -> Result<Change, ChangeError> {
    let Value::Object(map) = raw else {
        return Err(ChangeError::NotAnObject { found: kind_of(raw) });
    };
    let kind = match map.get("kind").and_then(Value::as_str) {
        Some("create") => "create",
        Some("update") => "update",
        Some("delete") => "delete",
        other => {
            return Err(ChangeError::UnknownKind {
                kind: other.map(str::to_owned),
            })
        }
    };
    let tick = match map.get("tick") {
        None | Some(Value::Null) => None,
        Some(v) => Some(u64::from_wire(v).map_err(|source| ChangeError::Member {
            kind,
            member: "tick",
            source,
        })?),
    };
    let member = |name: &'static str| {
        map.get(name)
            .ok_or(ChangeError::MissingMember { kind, member: name })
    };

    Ok(match kind {
        "create" => Change::Create {
            tick,
            entity: decode_entity(member("entity")?, options)?,
        },
        "update" => Change::Update {
            tick,
            delta: decode_delta(member("entity")?, &options.with_delta(true))?,
        },
        _ => Change::Delete {
            tick,
            id: EntityId::from_wire(member("id")?).map_err(|source| ChangeError::Member {
                kind,
                member: "id",
                source,
            })?,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
