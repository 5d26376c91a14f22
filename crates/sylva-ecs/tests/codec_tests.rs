//! Integration tests for the entity codec: visibility, delta semantics, the
//! legacy shape, deprecated ids and per-component failure handling.

use serde_json::json;
use sylva_ecs::components::{
    Challenges, DeathInfo, Emote, Expires, Health, Inventory, Label, NpcState, OccupancyComponent,
    Position, RemoteConnection, RigidBody, Stashed, UserRoles,
};
use sylva_ecs::prelude::*;
use sylva_ecs::registry::DEPRECATED_COMPONENT_IDS;
use sylva_ecs::types::{EmoteType, UserRole};

fn id(raw: u64) -> EntityId {
    EntityId::from_raw(raw)
}

fn full_player(raw: u64) -> Entity {
    Entity::new(id(raw))
        .with(RemoteConnection {})
        .with(Position { v: [10.0, 20.0, 30.0] })
        .with(RigidBody {
            velocity: [0.0, -1.0, 0.0],
        })
        .with(Label { text: "pat".into() })
        .with(Inventory::default())
        .with(Emote {
            emote_type: Some(EmoteType::Wave),
            emote_start_time: 100.0,
            emote_expiry_time: 101.5,
            ..Default::default()
        })
        .with(Challenges::default())
        .with(Expires { trigger_at: 9e9 })
        .with(Health {
            hp: 5,
            max_hp: 10,
            ..Default::default()
        })
        .with(NpcState {
            data: Buffer::new(vec![1, 2, 3]),
        })
        .with(OccupancyComponent { buffer: None })
        .with(Stashed::default())
        .with(UserRoles {
            roles: [UserRole::Admin, UserRole::Flying].into_iter().collect(),
        })
        .with(DeathInfo {
            last_death_pos: Some([1.0, 2.0, 3.0]),
            last_death_time: None,
        })
}

// -- round trips --------------------------------------------------------------

#[test]
fn server_round_trip_is_lossless() {
    let e = full_player(77);
    let wire = encode_entity(SerializeTarget::Server, &e, false);
    assert_eq!(decode_entity(&wire, &DecodeOptions::server()).unwrap(), e);
}

#[test]
fn encoded_length_is_odd() {
    let e = full_player(77);
    for target in [
        SerializeTarget::Server,
        SerializeTarget::client(id(77)),
        SerializeTarget::client(id(78)),
    ] {
        let wire = encode_entity(target, &e, false);
        assert_eq!(wire.as_array().unwrap().len() % 2, 1);
    }
}

// -- visibility ---------------------------------------------------------------

#[test]
fn server_only_components_never_reach_clients() {
    let e = full_player(77);
    for viewer in [77, 78] {
        let wire = encode_entity(SerializeTarget::client(id(viewer)), &e, false);
        let seen = decode_entity(&wire, &DecodeOptions::client()).unwrap();
        for kind in seen.kinds() {
            assert_ne!(kind.visibility(), Visibility::Server, "{kind} leaked");
        }
        assert!(!seen.has(ComponentKind::NpcState));
        assert!(!seen.has(ComponentKind::Expires));
        assert!(!seen.has(ComponentKind::Stashed));
    }
}

#[test]
fn owner_only_components_reach_only_the_owner() {
    let e = full_player(77);

    let own = decode_entity(
        &encode_entity(SerializeTarget::client(id(77)), &e, false),
        &DecodeOptions::client(),
    )
    .unwrap();
    assert!(own.has_all(&[
        ComponentKind::Inventory,
        ComponentKind::Challenges,
        ComponentKind::UserRoles,
        ComponentKind::DeathInfo,
    ]));

    let other = decode_entity(
        &encode_entity(SerializeTarget::client(id(78)), &e, false),
        &DecodeOptions::client(),
    )
    .unwrap();
    for kind in other.kinds() {
        assert_eq!(kind.visibility(), Visibility::Public);
    }
    assert!(other.has(ComponentKind::Label));
    assert!(other.has(ComponentKind::Position));
}

#[test]
fn visibility_applies_to_clears_too() {
    let mut d = EntityDelta::new(id(77));
    d.clear(ComponentKind::NpcState).clear(ComponentKind::Label);
    let wire = encode_entity(SerializeTarget::client(id(77)), &d, true);
    assert_eq!(wire, json!([77, 37, null]));
}

// -- delta semantics ----------------------------------------------------------

#[test]
fn cleared_slot_is_written_only_in_delta_mode() {
    let mut d = EntityDelta::new(id(5));
    d.clear(ComponentKind::Label).set(Position { v: [1.0, 1.0, 1.0] });

    assert_eq!(
        encode_entity(SerializeTarget::Server, &d, true),
        json!([5, 54, [[1.0, 1.0, 1.0]], 37, null])
    );
    assert_eq!(
        encode_entity(SerializeTarget::Server, &d, false),
        json!([5, 54, [[1.0, 1.0, 1.0]]])
    );
}

#[test]
fn delta_round_trip_keeps_clears() {
    let mut d = EntityDelta::new(id(5));
    d.clear(ComponentKind::Label).set(Health {
        hp: 1,
        ..Default::default()
    });
    let wire = encode_entity(SerializeTarget::Server, &d, true);
    let back = decode_delta(&wire, &DecodeOptions::server().with_delta(true)).unwrap();
    assert_eq!(back, d);
    assert!(back.slot::<Label>().is_cleared());
}

#[test]
fn null_payload_is_fatal_outside_delta_mode() {
    let err = decode_entity(&json!([5, 37, null]), &DecodeOptions::client()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::NullComponent {
            component_id: 37,
            ..
        }
    ));
}

#[test]
fn null_payload_is_fatal_even_for_retired_or_unknown_ids() {
    for component_id in [DEPRECATED_COMPONENT_IDS[0], 9999] {
        let err = decode_entity(&json!([3, component_id, null]), &DecodeOptions::server())
            .unwrap_err();
        assert!(
            matches!(err, CodecError::NullComponent { component_id: got, .. } if got == component_id),
            "{component_id}: {err:?}"
        );
    }
}

#[test]
fn null_for_a_retired_id_is_ignored_in_delta_mode() {
    let raw = json!([3, DEPRECATED_COMPONENT_IDS[0], null, 37, null]);
    let d = decode_delta(&raw, &DecodeOptions::server().with_delta(true)).unwrap();
    assert_eq!(d.len(), 1);
    assert!(d.slot::<Label>().is_cleared());
}

// -- legacy shape -------------------------------------------------------------

#[test]
fn legacy_and_modern_forms_decode_identically() {
    let modern = json!([12, 54, [[1.0, 2.0, 3.0]], 37, ["sign"], 75, [3, 9]]);
    let legacy = json!([12, {
        "position": {"v": [1.0, 2.0, 3.0]},
        "label": {"1": "sign"},
        "health": {"hp": 3, "maxHp": 9},
    }]);
    let opts = DecodeOptions::server();
    assert_eq!(
        decode_entity(&legacy, &opts).unwrap(),
        decode_entity(&modern, &opts).unwrap()
    );
}

#[test]
fn legacy_skips_unknown_properties() {
    let legacy = json!([12, {"label": ["a"], "long_gone_component": {"x": 1}}]);
    let e = decode_entity(&legacy, &DecodeOptions::server()).unwrap();
    assert_eq!(e.kinds().collect::<Vec<_>>(), vec![ComponentKind::Label]);
}

#[test]
fn legacy_null_is_a_clear_in_delta_mode() {
    let legacy = json!([12, {"label": null, "position": [[0, 0, 0]]}]);
    let d = decode_delta(&legacy, &DecodeOptions::server().with_delta(true)).unwrap();
    assert!(d.slot::<Label>().is_cleared());
    assert!(d.slot::<Position>().value().is_some());

    let e = decode_entity(&legacy, &DecodeOptions::server()).unwrap();
    assert!(!e.has(ComponentKind::Label));
}

#[test]
fn legacy_accepts_string_id() {
    let e = decode_entity(&json!(["12", {}]), &DecodeOptions::server()).unwrap();
    assert_eq!(e.id(), id(12));
}

// -- registry gating ----------------------------------------------------------

#[test]
fn deprecated_ids_are_skipped() {
    for deprecated in DEPRECATED_COMPONENT_IDS {
        let raw = json!([3, deprecated, ["whatever"], 37, ["kept"]]);
        let e = decode_entity(&raw, &DecodeOptions::server()).unwrap();
        assert_eq!(e.kinds().collect::<Vec<_>>(), vec![ComponentKind::Label]);
    }
}

#[test]
fn unknown_ids_are_fatal_even_when_tolerant() {
    for opts in [DecodeOptions::server(), DecodeOptions::client()] {
        let err = decode_entity(&json!([3, 9999, []]), &opts).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownComponent {
                component_id: 9999,
                ..
            }
        ));
    }
}

// -- failure isolation --------------------------------------------------------

#[test]
fn tolerant_reader_drops_only_the_bad_component() {
    let raw = json!([3, 54, ["not a vector"], 37, ["fine"], 75, [1, 2]]);
    let e = decode_entity(&raw, &DecodeOptions::client()).unwrap();
    assert!(!e.has(ComponentKind::Position));
    assert_eq!(e.get::<Label>().map(|l| l.text.as_str()), Some("fine"));
    assert_eq!(e.get::<Health>().map(|h| h.max_hp), Some(2));
}

#[test]
fn authoritative_reader_fails_and_names_the_component() {
    let raw = json!([3, 54, ["not a vector"], 37, ["fine"]]);
    let err = decode_entity(&raw, &DecodeOptions::server()).unwrap_err();
    assert!(!err.is_structural());
    assert_eq!(err.raw(), Some(&raw));
    match err {
        CodecError::Component {
            entity_id,
            component_id,
            name,
            source,
            ..
        } => {
            assert_eq!(entity_id, id(3));
            assert_eq!(component_id, 54);
            assert_eq!(name, "position");
            assert!(matches!(source, FieldError::InField { tag: 1, .. }));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

// -- determinism --------------------------------------------------------------

#[test]
fn encoding_is_byte_identical_for_equal_inputs() {
    let a = full_player(77);
    let b = full_player(77);
    let bytes = |e: &Entity| serde_json::to_vec(&encode_entity(SerializeTarget::Server, e, false)).unwrap();
    assert_eq!(bytes(&a), bytes(&b));

    // Insertion order does not matter.
    let c = Entity::new(id(1))
        .with(Label { text: "x".into() })
        .with(Position::default());
    let d = Entity::new(id(1))
        .with(Position::default())
        .with(Label { text: "x".into() });
    assert_eq!(bytes(&c), bytes(&d));
}
