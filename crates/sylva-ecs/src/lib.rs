//! Sylva ECS -- world-state wire codec for a sparse Entity Component System.
//!
//! An entity is an id plus an open-ended set of typed components. This crate
//! turns entities (and deltas against them) into a compact JSON wire form and
//! back again, filtering what each recipient is allowed to see.
//!
//! - Components are declared with permanent field tags and encode to sparse,
//!   tag-indexed arrays ([`fields`]).
//! - A static registry maps permanent component ids to decoders and property
//!   names ([`registry`]).
//! - The entity codec ([`codec`]) writes `[id, componentId, payload, ...]`,
//!   skips components the target may not see, and reads both the modern form
//!   and the legacy `[id, { name: payload }]` form.
//!
//! # Quick Start
//!
//! ```
//! use sylva_ecs::prelude::*;
//! use sylva_ecs::components::{Label, Position};
//!
//! let mut entity = Entity::new(EntityId::from_raw(42));
//! entity.insert(Position { v: [1.0, 2.0, 3.0] });
//! entity.insert(Label { text: "lamp".into() });
//!
//! let wire = encode_entity(SerializeTarget::Server, &entity, false);
//! let back = decode_entity(&wire, &DecodeOptions::server()).unwrap();
//! assert_eq!(back, entity);
//! ```

#![deny(unsafe_code)]

pub mod change;
pub mod codec;
pub mod components;
pub mod delta;
pub mod entity;
pub mod fields;
pub mod registry;
pub mod types;
pub mod visibility;
pub mod wire;

use serde_json::Value;

use crate::entity::EntityId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while decoding a single field or primitive value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The raw value has the wrong JSON kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An integer did not fit the target width.
    #[error("{expected} out of range: {value}")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },

    /// The raw value has the right kind but an invalid shape or content.
    #[error("malformed {expected}: {details}")]
    Malformed {
        expected: &'static str,
        details: String,
    },

    /// A component payload was neither an array nor a keyed object.
    #[error("component payload must be an array or object, found {found}")]
    NotAContainer { found: &'static str },

    /// A field-level failure, tagged with the field that produced it.
    #[error("field {tag} ('{name}'): {source}")]
    InField {
        tag: u16,
        name: &'static str,
        source: Box<FieldError>,
    },
}

/// Errors produced by the entity-level codec.
///
/// Every variant except [`CodecError::Component`] is structural and aborts the
/// decode regardless of trust level. The `raw` payload is only populated when
/// [`DecodeOptions::attach_raw`](codec::DecodeOptions::attach_raw) is set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// The input is not an id-prefixed array.
    #[error("entity data must be an array, found {found}")]
    NonObject {
        found: &'static str,
        raw: Option<Value>,
    },

    /// The leading entity id is missing, non-integral or not positive.
    #[error("entity id missing or invalid")]
    InvalidId { raw: Option<Value> },

    /// The elements after the id do not form `[componentId, payload]` pairs.
    #[error("entity {entity_id}: {remaining} elements after the id do not form id/payload pairs")]
    UnevenData {
        entity_id: EntityId,
        remaining: usize,
        raw: Option<Value>,
    },

    /// A component id slot does not hold an integer.
    #[error("entity {entity_id}: component id {value} is not an integer")]
    InvalidComponentId {
        entity_id: EntityId,
        value: String,
        raw: Option<Value>,
    },

    /// A component payload was `null` outside delta mode.
    #[error("entity {entity_id}: component {component_id} is null outside delta mode")]
    NullComponent {
        entity_id: EntityId,
        component_id: u32,
        raw: Option<Value>,
    },

    /// A component id is neither registered nor deprecated.
    #[error("entity {entity_id}: unknown component id {component_id}")]
    UnknownComponent {
        entity_id: EntityId,
        component_id: u32,
        raw: Option<Value>,
    },

    /// A registered component failed to decode on the authoritative path.
    #[error("entity {entity_id}: failed to decode component '{name}' ({component_id}): {source}")]
    Component {
        entity_id: EntityId,
        component_id: u32,
        name: &'static str,
        source: FieldError,
        raw: Option<Value>,
    },
}

impl CodecError {
    /// The raw entity payload, if it was attached.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            CodecError::NonObject { raw, .. }
            | CodecError::InvalidId { raw }
            | CodecError::UnevenData { raw, .. }
            | CodecError::InvalidComponentId { raw, .. }
            | CodecError::NullComponent { raw, .. }
            | CodecError::UnknownComponent { raw, .. }
            | CodecError::Component { raw, .. } => raw.as_ref(),
        }
    }

    /// Whether the error concerns the entity envelope rather than one
    /// component's contents.
    pub fn is_structural(&self) -> bool {
        !matches!(self, CodecError::Component { .. })
    }
}

/// Errors produced by the change codec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChangeError {
    /// The change is not a JSON object.
    #[error("change must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The `kind` tag is missing or not one of create/update/delete.
    #[error("unknown change kind {kind:?}")]
    UnknownKind { kind: Option<String> },

    /// A required member is absent.
    #[error("'{kind}' change is missing '{member}'")]
    MissingMember {
        kind: &'static str,
        member: &'static str,
    },

    /// A scalar member failed to decode.
    #[error("'{kind}' change has invalid '{member}': {source}")]
    Member {
        kind: &'static str,
        member: &'static str,
        source: FieldError,
    },

    /// The embedded entity failed to decode.
    #[error(transparent)]
    Entity(#[from] CodecError),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::change::{apply_change, decode_change, encode_change, merge_change, Change};
    pub use crate::codec::{
        decode_delta, decode_entity, encode_entity, encode_optional_entity, DecodeOptions, Trust,
        WireShape,
    };
    pub use crate::delta::{ComponentSlots, EntityDelta, Slot};
    pub use crate::entity::{Entity, EntityId};
    pub use crate::fields::{ComponentFields, FieldSpec, SparseFields};
    pub use crate::registry::{AnyComponent, Component, ComponentKind, RegistryEntry, REGISTRY};
    pub use crate::visibility::{SerializeTarget, Visibility};
    pub use crate::wire::{Buffer, WireValue};
    pub use crate::{ChangeError, CodecError, FieldError};
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------
