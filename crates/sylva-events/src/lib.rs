//! Sylva Events -- keyed-object codec for one-shot command payloads.
//!
//! Each event is a flat JSON object with a `kind` discriminator and named
//! fields, e.g. `{"kind": "labelChangeEvent", "id": 7, "text": "hi"}`. Field
//! values use the same primitive encoders as component fields
//! ([`sylva_ecs::wire::WireValue`]): 64-bit integers travel as decimal
//! strings, buffers as hex, tagged unions as `{kind, ...}` objects.
//!
//! Unlike the entity codec there is no visibility filter, no delta mode and
//! no legacy shape. An unrecognised `kind` is always an error.
//!
//! # Example
//!
//! ```
//! use sylva_ecs::entity::EntityId;
//! use sylva_events::prelude::*;
//!
//! let event: Event = LabelChangeEvent {
//!     id: EntityId::from_raw(7),
//!     text: "hello".into(),
//! }
//! .into();
//!
//! let wire = encode_event(&event);
//! assert_eq!(wire["kind"], "labelChangeEvent");
//! assert_eq!(decode_event(&wire).unwrap(), event);
//! ```

#![deny(unsafe_code)]

pub mod codec;
pub mod event;

use sylva_ecs::FieldError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while decoding an event payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// The payload is not a JSON object.
    #[error("event must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The payload has no string `kind` member.
    #[error("event has no string 'kind' member")]
    MissingKind,

    /// The `kind` names no known event.
    #[error("unknown event kind '{kind}'")]
    UnknownKind { kind: String },

    /// A named field failed to decode.
    #[error("{kind}.{field}: {source}")]
    Field {
        kind: &'static str,
        field: &'static str,
        source: FieldError,
    },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for the common event types and functions.
pub mod prelude {
    pub use crate::codec::{decode_event, encode_event, EventPayload};
    pub use crate::event::*;
    pub use crate::EventError;
}
