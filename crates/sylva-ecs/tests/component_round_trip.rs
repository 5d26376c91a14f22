//! Every registered component, populated in every field, must survive both
//! the sparse array form and the keyed-object form.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{json, Value};
use sylva_ecs::components::*;
use sylva_ecs::prelude::*;
use sylva_ecs::types::*;

fn id(raw: u64) -> EntityId {
    EntityId::from_raw(raw)
}

fn ids(raw: &[u64]) -> IdSet {
    raw.iter().copied().map(id).collect()
}

fn item(raw: u64) -> Item {
    let mut item = Item::new(id(raw));
    item.payload.insert("7".into(), json!(2.5));
    item
}

fn stack(raw: u64, count: u64) -> ItemAndCount {
    ItemAndCount::new(item(raw), count)
}

fn bag() -> ItemBag {
    let mut bag = ItemBag::new();
    bag.insert("101".into(), stack(101, 3));
    bag.insert("gold".into(), stack(9, 250));
    bag
}

fn buffer() -> Buffer {
    Buffer::new(vec![0x00, 0x7f, 0xff, 0x10])
}

fn acl() -> Acl {
    let mut acl = Acl {
        everyone: [AclAction::Interact].into(),
        creator: Some((id(5), [AclAction::Shape, AclAction::WarpFrom].into())),
        creator_team: Some((id(6), [AclAction::ApplyBuffs].into())),
        ..Default::default()
    };
    acl.roles.insert(UserRole::Admin, [AclAction::Destroy, AclAction::Administrate].into());
    acl.entities.insert(id(7), [AclAction::Place].into());
    acl.teams.insert(id(8), [AclAction::Pvp].into());
    acl
}

fn trader(raw: u64) -> Trader {
    Trader {
        id: id(raw),
        offer_assignment: vec![
            (OwnedItemReference::Item { idx: 1 }, stack(44, 2)),
            (OwnedItemReference::Currency { key: "gold".into() }, stack(9, 10)),
        ],
        accepted: true,
    }
}

/// A value of `kind` with every declared field set.
fn populated(kind: ComponentKind) -> AnyComponent {
    match kind {
        ComponentKind::Iced => Iced {}.into(),
        ComponentKind::RemoteConnection => RemoteConnection {}.into(),
        ComponentKind::Position => Position { v: [1.5, -2.0, 3.25] }.into(),
        ComponentKind::Orientation => Orientation { v: [0.5, -1.25] }.into(),
        ComponentKind::RigidBody => RigidBody {
            velocity: [0.0, -9.5, 1.0],
        }
        .into(),
        ComponentKind::Size => Size { v: [1.0, 2.0, 0.5] }.into(),
        ComponentKind::BoxBounds => BoxBounds {
            v0: [-1, 0, 2],
            v1: [3, 4, 5],
        }
        .into(),
        ComponentKind::ShardSeed => ShardSeed { buffer: buffer() }.into(),
        ComponentKind::ShardDiff => ShardDiff { buffer: buffer() }.into(),
        ComponentKind::ShardShapes => ShardShapes { buffer: buffer() }.into(),
        ComponentKind::ShardSkyOcclusion => ShardSkyOcclusion { buffer: buffer() }.into(),
        ComponentKind::ShardIrradiance => ShardIrradiance { buffer: buffer() }.into(),
        ComponentKind::ShardWater => ShardWater { buffer: buffer() }.into(),
        ComponentKind::ShardOccupancy => ShardOccupancy { buffer: buffer() }.into(),
        ComponentKind::ShardDye => ShardDye { buffer: buffer() }.into(),
        ComponentKind::ShardMoisture => ShardMoisture { buffer: buffer() }.into(),
        ComponentKind::ShardGrowth => ShardGrowth { buffer: buffer() }.into(),
        ComponentKind::ShardPlacer => ShardPlacer { buffer: buffer() }.into(),
        ComponentKind::ShardMuck => ShardMuck { buffer: buffer() }.into(),
        ComponentKind::Label => Label {
            text: "market stall".into(),
        }
        .into(),
        ComponentKind::GrabBag => GrabBag {
            slots: bag(),
            filter: GrabBagFilter::Only {
                entity_ids: ids(&[3, 4]),
                expiry: Some(120.5),
            },
            mined: true,
        }
        .into(),
        ComponentKind::Acquisition => Acquisition {
            acquired_by: id(12),
            items: bag(),
        }
        .into(),
        ComponentKind::LooseItem => LooseItem { item: item(55) }.into(),
        ComponentKind::Inventory => Inventory {
            items: vec![Some(stack(1, 1)), None, Some(stack(2, 64))],
            currencies: bag(),
            hotbar: vec![None, Some(stack(3, 5))],
            selected: OwnedItemReference::Hotbar { idx: 1 },
            overflow: bag(),
        }
        .into(),
        ComponentKind::ContainerInventory => ContainerInventory {
            items: vec![Some(stack(4, 9)), None],
        }
        .into(),
        ComponentKind::PricedContainerInventory => PricedContainerInventory {
            items: vec![
                Some(PricedItem {
                    contents: stack(20, 1),
                    price: stack(9, 30),
                    seller_id: id(77),
                }),
                None,
            ],
            infinite_capacity: true,
        }
        .into(),
        ComponentKind::SelectedItem => SelectedItem {
            item: Some(stack(8, 1)),
        }
        .into(),
        ComponentKind::Wearing => {
            let mut items = ItemAssignment::new();
            items.insert(id(300), item(301));
            Wearing { items }.into()
        }
        ComponentKind::Emote => Emote {
            emote_type: Some(EmoteType::FishingCastRelease),
            emote_start_time: 10.0,
            emote_expiry_time: 12.5,
            rich_emote_components: Some(RichEmoteComponents {
                fishing_info: Some(EmoteFishingInfo {
                    line_end_position: Some(FishingLineEnd::ReelIn {
                        start: [1.0, 2.0, 3.0],
                        duration: 0.75,
                    }),
                    line_end_item: Some(item(61)),
                }),
                throw_info: Some(EmoteThrowInfo {
                    physics: FishingLinePhysics {
                        velocity: [0.0, 1.0, 0.0],
                        gravity: [0.0, -9.5, 0.0],
                        start: [4.0, 5.0, 6.0],
                    },
                    angular_velocity: Some([0.25, 0.5]),
                }),
                item_override: Some(item(62)),
            }),
            emote_nonce: Some(0.125),
        }
        .into(),
        ComponentKind::AppearanceComponent => AppearanceComponent {
            appearance: Appearance {
                skin_color_id: "skin_3".into(),
                eye_color_id: "eye_1".into(),
                hair_color_id: "hair_9".into(),
                head_id: id(400),
            },
        }
        .into(),
        ComponentKind::GroupComponent => GroupComponent {
            tensor: "AAECAw==".into(),
        }
        .into(),
        ComponentKind::Challenges => {
            let mut started_at = IdTimes::new();
            started_at.insert(id(31), 100.5);
            let mut finished_at = IdTimes::new();
            finished_at.insert(id(32), 200.0);
            Challenges {
                in_progress: ids(&[31]),
                complete: ids(&[32]),
                available: ids(&[33, 34]),
                started_at,
                finished_at,
            }
            .into()
        }
        ComponentKind::RecipeBook => {
            let mut recipes = ItemSet::new();
            recipes.insert("500".into(), item(500));
            RecipeBook { recipes }.into()
        }
        ComponentKind::Expires => Expires { trigger_at: 90.0 }.into(),
        ComponentKind::Icing => Icing { trigger_at: 91.0 }.into(),
        ComponentKind::Warpable => Warpable {
            trigger_at: 5.0,
            warp_to: [10.0, 20.0, 30.0],
            orientation: [0.0, 1.5],
            owner: id(3),
        }
        .into(),
        ComponentKind::PlayerStatus => {
            let mut nux_status = AllNuxStatus::new();
            nux_status.insert(
                4,
                NuxStatus {
                    complete: true,
                    state_id: "done".into(),
                },
            );
            nux_status.insert(
                -1,
                NuxStatus {
                    complete: false,
                    state_id: "intro".into(),
                },
            );
            PlayerStatus {
                init: true,
                nux_status,
            }
            .into()
        }
        ComponentKind::PlayerBehavior => PlayerBehavior {
            camera_mode: CameraMode::IsoNw,
            place_event_info: Some(PlaceEventInfo {
                time: 44.5,
                position: [1, -2, 3],
            }),
        }
        .into(),
        ComponentKind::WorldMetadata => WorldMetadata {
            aabb: Box2 {
                v0: [-512.0, 0.0, -512.0],
                v1: [512.0, 256.0, 512.0],
            },
        }
        .into(),
        ComponentKind::NpcMetadata => NpcMetadata {
            type_id: id(900),
            created_time: 1.5,
            spawn_event_type_id: Some(id(901)),
            spawn_event_id: Some(id(902)),
            spawn_position: [1.0, 2.0, 3.0],
            spawn_orientation: [0.5, 0.25],
        }
        .into(),
        ComponentKind::NpcState => NpcState { data: buffer() }.into(),
        ComponentKind::GroupPreviewReference => GroupPreviewReference {
            reference: Some(id(44)),
        }
        .into(),
        ComponentKind::AclComponent => AclComponent { acl: acl() }.into(),
        ComponentKind::DeedComponent => DeedComponent {
            owner: id(1),
            description: "north field".into(),
            plots: vec![id(2), id(3)],
            custom_owner_name: Some("Ada".into()),
            map_display_size: Some(4),
        }
        .into(),
        ComponentKind::GroupPreviewComponent => GroupPreviewComponent {
            owner_id: id(1),
            blueprint_id: Some(id(2)),
        }
        .into(),
        ComponentKind::BlueprintComponent => BlueprintComponent {
            owner_id: id(1),
            blueprint_id: id(2),
        }
        .into(),
        ComponentKind::CraftingStationComponent => CraftingStationComponent {}.into(),
        ComponentKind::Health => Health {
            hp: 40,
            max_hp: 100,
            last_damage_source: Some(DamageSource::Attack {
                attacker: id(66),
                dir: Some([0.0, 0.0, 1.0]),
            }),
            last_damage_time: Some(12.0),
            last_damage_inventory_consequence: Some(bag()),
            last_damage_amount: Some(-15),
        }
        .into(),
        ComponentKind::BuffsComponent => BuffsComponent {
            buffs: vec![
                Buff {
                    item_id: id(70),
                    start_time: Some(3.0),
                    from_id: Some(id(71)),
                    is_disabled: Some(false),
                },
                Buff {
                    item_id: id(72),
                    ..Default::default()
                },
            ],
            trigger_at: Some(8.0),
        }
        .into(),
        ComponentKind::Gremlin => Gremlin {}.into(),
        ComponentKind::PlaceableComponent => PlaceableComponent {
            item_id: id(80),
            animation: Some(PlaceableAnimation {
                kind: PlaceableAnimationType::Play,
                repeat: Some(AnimationRepeatKind::Repeat),
                start_time: 2.5,
            }),
        }
        .into(),
        ComponentKind::GroupedEntities => GroupedEntities {
            ids: vec![id(1), id(2), id(3)],
        }
        .into(),
        ComponentKind::InGroup => InGroup { id: id(81) }.into(),
        ComponentKind::PictureFrameContents => PictureFrameContents {
            placer_id: id(1),
            photo_id: Some(id(2)),
            minigame_id: Some(id(3)),
        }
        .into(),
        ComponentKind::TriggerState => {
            let mut by_root = BTreeMap::new();
            by_root.insert(id(90), json!({"kind": "seq", "progress": [1, 2]}));
            TriggerState { by_root }.into()
        }
        ComponentKind::LifetimeStats => {
            let mut stats = BTreeMap::new();
            stats.insert(LifetimeStatsType::Fished, bag());
            stats.insert(LifetimeStatsType::TakenPhoto, bag());
            LifetimeStats { stats }.into()
        }
        ComponentKind::OccupancyComponent => OccupancyComponent {
            buffer: Some(buffer()),
        }
        .into(),
        ComponentKind::VideoComponent => VideoComponent {
            video_url: Some("https://video.example/1".into()),
            video_start_time: Some(4.0),
            muted: Some(true),
        }
        .into(),
        ComponentKind::PlayerSession => PlayerSession {
            id: "session-1".into(),
        }
        .into(),
        ComponentKind::PresetApplied => PresetApplied {
            preset_id: id(1),
            applier_id: id(2),
            applied_at: 3.0,
        }
        .into(),
        ComponentKind::PresetPrototype => PresetPrototype {
            last_updated: 5.5,
            last_updated_by: id(6),
        }
        .into(),
        ComponentKind::FarmingPlantComponent => FarmingPlantComponent {
            planter: id(1),
            seed: id(2),
            plant_time: 3.0,
            last_tick: 4.0,
            stage: 2,
            stage_progress: 0.5,
            water_level: 0.75,
            wilt: 0.25,
            expected_blocks: Some("abc".into()),
            status: PlantStatus::HaltedWater,
            variant: Some(1),
            buffs: vec![id(5)],
            water_at: Some(6.0),
            player_actions: vec![
                FarmingPlayerAction::Water {
                    amount: 0.5,
                    timestamp: 7.0,
                },
                FarmingPlayerAction::Fertilize {
                    fertilizer: item(8),
                    timestamp: 9.0,
                },
                FarmingPlayerAction::AdminDestroy { timestamp: 10.0 },
                FarmingPlayerAction::Poke { timestamp: 11.0 },
            ],
            fully_grown_at: Some(12.0),
            next_stage_at: Some(13.0),
        }
        .into(),
        ComponentKind::ShardFarming => ShardFarming { buffer: buffer() }.into(),
        ComponentKind::CreatedBy => CreatedBy {
            id: id(1),
            created_at: 2.0,
        }
        .into(),
        ComponentKind::MinigameComponent => MinigameComponent {
            metadata: MinigameMetadata::Spleef {
                start_ids: ids(&[1, 2]),
                arena_marker_ids: ids(&[3]),
            },
            stats_changed_at: Some(1.0),
            ready: true,
            minigame_element_ids: ids(&[4, 5]),
            active_instance_ids: ids(&[6]),
            hero_photo_id: Some(id(7)),
            minigame_settings: Some(buffer()),
            entry_price: Some(25.0),
            game_modified_at: Some(2.0),
        }
        .into(),
        ComponentKind::MinigameInstance => {
            let mut player_stats = BTreeMap::new();
            player_stats.insert(
                id(11),
                SpleefPlayerStats {
                    player_id: id(11),
                    rounds_won: 2,
                },
            );
            let mut active_players = ActivePlayerMap::new();
            active_players.insert(
                id(11),
                ActivePlayerInfo {
                    entry_stash_id: id(12),
                    entry_position: [1.0, 2.0, 3.0],
                    entry_warped_to: Some([4.0, 5.0, 6.0]),
                    entry_time: 7.0,
                },
            );
            MinigameInstance {
                state: MinigameInstanceState::Spleef(SpleefInstanceState {
                    instance_state: SpleefPhase::PlayingRound {
                        round_expires: 60.0,
                        alive_round_players: ids(&[11]),
                        tag_round_state: Some(TagRoundState { it_player: id(11) }),
                    },
                    observer_spawn_points: vec![[0.0, 10.0, 0.0]],
                    player_stats,
                    round_number: 3,
                }),
                minigame_id: id(10),
                finished: true,
                active_players,
                space_clipboard: Some(SpaceClipboardInfo {
                    region: ClipboardRegion::Aabb {
                        bounds: Box2 {
                            v0: [0.0, 0.0, 0.0],
                            v1: [8.0, 8.0, 8.0],
                        },
                        clipboard_entity_id: id(13),
                    },
                }),
                instance_element_ids: ids(&[14, 15]),
            }
            .into()
        }
        ComponentKind::PlayingMinigame => PlayingMinigame {
            minigame_id: id(1),
            minigame_instance_id: id(2),
            minigame_type: MinigameType::Deathmatch,
        }
        .into(),
        ComponentKind::MinigameElement => MinigameElement { minigame_id: id(1) }.into(),
        ComponentKind::ActiveTray => ActiveTray { id: id(1) }.into(),
        ComponentKind::Stashed => Stashed {
            stashed_at: 1.0,
            stashed_by: id(2),
            original_entity_id: id(3),
        }
        .into(),
        ComponentKind::MinigameInstanceTickInfo => MinigameInstanceTickInfo {
            last_tick: 1.0,
            trigger_at: 2.0,
        }
        .into(),
        ComponentKind::WarpingTo => WarpingTo {
            position: [1.0, 2.0, 3.0],
            orientation: Some([0.5, 0.5]),
            set_at: 4.0,
        }
        .into(),
        ComponentKind::MinigameInstanceExpire => MinigameInstanceExpire { trigger_at: 3.0 }.into(),
        ComponentKind::PlacerComponent => PlacerComponent {
            buffer: Some(buffer()),
        }
        .into(),
        ComponentKind::QuestGiver => QuestGiver {
            concurrent_quests: Some(2),
            concurrent_quest_dialog: Some("busy".into()),
        }
        .into(),
        ComponentKind::DefaultDialog => DefaultDialog {
            text: "hello".into(),
            modified_at: Some(1.0),
            modified_by: Some(id(2)),
        }
        .into(),
        ComponentKind::Unmuck => Unmuck {
            volume: Volume::Sphere { radius: 16.0 },
            snap_to_grid: Some(32),
        }
        .into(),
        ComponentKind::RobotComponent => RobotComponent {
            trigger_at: Some(1.0),
            internal_battery_charge: Some(2.0),
            internal_battery_capacity: Some(3.0),
            last_update: Some(4.0),
        }
        .into(),
        ComponentKind::AdminEntity => AdminEntity {}.into(),
        ComponentKind::Protection => Protection {
            timestamp: Some(5.0),
        }
        .into(),
        ComponentKind::ProjectsProtection => ProjectsProtection {
            protection_child_id: Some(id(1)),
            size: [16.0, 8.0, 16.0],
            protection: Some(ProtectionParams { acl: acl() }),
            restoration: Some(RestorationParams {
                acl: Acl::default(),
                restore_delay_s: 30.0,
            }),
            restoration_child_id: Some(id(2)),
            timestamp: Some(3.0),
            snap_to_grid: Some(4),
        }
        .into(),
        ComponentKind::DeletesWith => DeletesWith { id: id(1) }.into(),
        ComponentKind::ItemBuyer => ItemBuyer {
            attribute_ids: vec![id(1), id(2)],
            buy_description: Some("fish only".into()),
        }
        .into(),
        ComponentKind::InspectionTweaks => InspectionTweaks { hidden: Some(true) }.into(),
        ComponentKind::ProfilePic => ProfilePic {
            cloud_bundle: BucketedImageCloudBundle {
                webp_320w: Some("a_320.webp".into()),
                webp_640w: Some("a_640.webp".into()),
                webp_1280w: Some("a_1280.webp".into()),
                png_1280w: Some("a_1280.png".into()),
                webp_original: Some("a.webp".into()),
                bucket: ImageBucket::Social,
            },
            hash: Some("deadbeef".into()),
        }
        .into(),
        ComponentKind::EntityDescription => EntityDescription {
            text: "an old well".into(),
        }
        .into(),
        ComponentKind::Landmark => Landmark {
            override_name: Some("The Well".into()),
            importance: Some(3),
        }
        .into(),
        ComponentKind::Collideable => Collideable {}.into(),
        ComponentKind::Restoration => Restoration {
            timestamp: Some(1.0),
            restore_delay_s: 2.0,
        }
        .into(),
        ComponentKind::TerrainRestorationDiff => TerrainRestorationDiff {
            restores: vec![TerrainRestorationEntry {
                position_index: 4095,
                created_at: 1.0,
                restore_time: 2.0,
                terrain: Some(3.0),
                placer: Some(4.0),
                dye: Some(5.0),
                shape: Some(6.0),
            }],
        }
        .into(),
        ComponentKind::Team => {
            let mut members = TeamMembers::new();
            members.insert(id(1), TeamMemberMetadata { joined_at: 10.0 });
            let mut pending_invites = TeamPendingInvites::new();
            pending_invites.insert(
                id(2),
                TeamInvite {
                    inviter_id: id(1),
                    invitee_id: id(2),
                    created_at: 11.0,
                },
            );
            Team {
                members,
                pending_invites,
                icon: Some("fern".into()),
                color: Some(0x33aa55),
                hero_photo_id: Some(id(3)),
                pending_requests: vec![TeamJoinRequest {
                    entity_id: id(4),
                    created_at: 12.0,
                }],
            }
            .into()
        }
        ComponentKind::PlayerCurrentTeam => PlayerCurrentTeam { team_id: id(1) }.into(),
        ComponentKind::UserRoles => UserRoles {
            roles: BTreeSet::from([UserRole::Baker, UserRole::NoClip]),
        }
        .into(),
        ComponentKind::RestoresTo => RestoresTo {
            trigger_at: 1.0,
            restore_to_state: EntityRestoreToState::Deleted,
            expire: Some(true),
        }
        .into(),
        ComponentKind::Trade => Trade {
            trader1: trader(1),
            trader2: trader(2),
            trigger_at: Some(3.0),
        }
        .into(),
        ComponentKind::ActiveTrades => ActiveTrades {
            trades: vec![TradeSpec {
                trade_id: id(1),
                id1: id(2),
                id2: id(3),
            }],
        }
        .into(),
        ComponentKind::PlacedBy => PlacedBy {
            id: id(1),
            placed_at: 2.0,
        }
        .into(),
        ComponentKind::TextSign => TextSign {
            text: vec!["OPEN".into(), "".into(), "daily".into()],
        }
        .into(),
        ComponentKind::Irradiance => Irradiance {
            intensity: 200,
            color: [1.0, 0.5, 0.25],
        }
        .into(),
        ComponentKind::LockedInPlace => LockedInPlace {}.into(),
        ComponentKind::DeathInfo => DeathInfo {
            last_death_pos: Some([1.0, 2.0, 3.0]),
            last_death_time: Some(4.0),
        }
        .into(),
        ComponentKind::SyntheticStats => SyntheticStats { online_players: 12 }.into(),
        ComponentKind::Idle => Idle {}.into(),
        ComponentKind::Voice => Voice {
            voice: "alto".into(),
        }
        .into(),
        ComponentKind::GiftGiver => GiftGiver {
            last_gift_time: Some(1.0),
            gift_targets: vec![id(2)],
        }
        .into(),
    }
}

#[test]
fn samples_set_every_declared_field() {
    for entry in REGISTRY {
        let component = populated(entry.kind);
        assert_eq!(component.kind(), entry.kind);
        let Value::Array(items) = component.encode() else {
            panic!("{}: component did not encode to an array", entry.name);
        };
        for spec in entry.kind.fields() {
            let slot = items.get(usize::from(spec.tag) - 1);
            assert!(
                slot.is_some_and(|v| !v.is_null()),
                "{}.{} left empty",
                entry.name,
                spec.name
            );
        }
    }
}

#[test]
fn every_component_round_trips_in_array_form() {
    for entry in REGISTRY {
        let component = populated(entry.kind);
        let decoded = (entry.decode)(&component.encode())
            .unwrap_or_else(|e| panic!("{}: {e}", entry.name));
        assert_eq!(decoded, component, "{}", entry.name);
    }
}

#[test]
fn every_component_round_trips_in_object_form() {
    for entry in REGISTRY {
        let component = populated(entry.kind);
        let named = component.to_named();
        assert_eq!(
            named.as_object().map(|m| m.len()),
            Some(entry.kind.fields().len()),
            "{}",
            entry.name
        );
        let decoded =
            (entry.decode)(&named).unwrap_or_else(|e| panic!("{}: {e}", entry.name));
        assert_eq!(decoded, component, "{}", entry.name);
    }
}

#[test]
fn fully_populated_entity_survives_both_entity_shapes() {
    let mut entity = Entity::new(id(4242));
    for kind in ComponentKind::ALL {
        entity.insert_any(populated(*kind));
    }
    let opts = DecodeOptions::server();

    let modern = encode_entity(SerializeTarget::Server, &entity, false);
    assert_eq!(decode_entity(&modern, &opts).unwrap(), entity);

    let named: serde_json::Map<String, Value> = entity
        .components()
        .map(|c| (c.kind().name().to_owned(), c.to_named()))
        .collect();
    let legacy = json!([4242, named]);
    assert_eq!(decode_entity(&legacy, &opts).unwrap(), entity);
}
