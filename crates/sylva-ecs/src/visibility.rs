//! Recipient visibility.
//!
//! Each component has a fixed [`Visibility`]. An encode call names a
//! [`SerializeTarget`]; components the target may not see are left out of the
//! output entirely, in snapshot and delta mode alike.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::registry::ComponentKind;

/// Who may receive a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// The server and every client.
    Public,
    /// The server and the client whose viewer is the entity itself.
    Owner,
    /// The server only.
    Server,
}

impl Visibility {
    pub fn is_visible_to(self, target: SerializeTarget, entity_id: EntityId) -> bool {
        match (self, target) {
            (_, SerializeTarget::Server) => true,
            (Visibility::Public, SerializeTarget::Client { .. }) => true,
            (Visibility::Owner, SerializeTarget::Client { viewer }) => viewer == entity_id,
            (Visibility::Server, SerializeTarget::Client { .. }) => false,
        }
    }
}

/// The recipient of an encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializeTarget {
    /// The authoritative server; sees everything.
    Server,
    /// A client session acting as `viewer`.
    Client { viewer: EntityId },
}

impl SerializeTarget {
    pub fn client(viewer: EntityId) -> Self {
        SerializeTarget::Client { viewer }
    }

    pub fn is_server(self) -> bool {
        matches!(self, SerializeTarget::Server)
    }

    /// Whether this target may receive `kind` on entity `entity_id`.
    pub fn can_see(self, kind: ComponentKind, entity_id: EntityId) -> bool {
        kind.visibility().is_visible_to(self, entity_id)
    }
}
