//! Shared value types carried inside components and events.
//!
//! Plain records and `{ "kind": ... }` tagged unions are serde-derived and
//! travel as JSON objects; containers follow the conventions in
//! [`wire`](crate::wire).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::entity::EntityId;
use crate::wire::{mismatch, WireValue};
use crate::FieldError;

pub type Vec2f = [f64; 2];
pub type Vec3f = [f64; 3];
pub type Vec3i = [i32; 3];

pub type IdList = Vec<EntityId>;
pub type IdSet = BTreeSet<EntityId>;
/// Per-id timestamps (challenge start/finish times).
pub type IdTimes = BTreeMap<EntityId, f64>;
/// Min and max corners.
pub type Aabb = [Vec3f; 2];
/// A voxel position and its new block value.
pub type TerrainUpdate = (Vec3i, u32);
/// Serialized voxel tensor.
pub type TensorBlob = String;

/// Serde adapter writing a map as `[key, value]` pairs, matching
/// [`WireValue`] maps for maps nested inside serde records.
mod pairs {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<K, V, S>(map: &BTreeMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map)
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
    where
        K: Deserialize<'de> + Ord,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Vec::<(K, V)>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}

/// Implements [`WireValue`] through the type's serde representation.
macro_rules! wire_via_serde {
    ($($ty:ty),* $(,)?) => {$(
        impl WireValue for $ty {
            fn to_wire(&self) -> Value {
                serde_json::to_value(self).unwrap_or(Value::Null)
            }

            fn from_wire(value: &Value) -> Result<Self, FieldError> {
                <$ty as Deserialize>::deserialize(value).map_err(|e| FieldError::Malformed {
                    expected: stringify!($ty),
                    details: e.to_string(),
                })
            }
        }
    )*};
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// An item instance: its type id plus optional attribute overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub payload: BTreeMap<String, Value>,
}

impl Item {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            payload: BTreeMap::new(),
        }
    }
}

/// An item stack. Wire form: `[item, "count"]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemAndCount {
    pub item: Item,
    pub count: u64,
}

impl ItemAndCount {
    pub fn new(item: Item, count: u64) -> Self {
        Self { item, count }
    }
}

impl WireValue for ItemAndCount {
    fn to_wire(&self) -> Value {
        Value::Array(vec![self.item.to_wire(), self.count.to_wire()])
    }

    fn from_wire(value: &Value) -> Result<Self, FieldError> {
        match value.as_array().map(Vec::as_slice) {
            Some([item, count]) => Ok(Self {
                item: Item::from_wire(item)?,
                count: u64::from_wire(count)?,
            }),
            Some(_) => Err(FieldError::Malformed {
                expected: "item and count",
                details: "expected [item, count]".into(),
            }),
            None => Err(mismatch("item and count", value)),
        }
    }
}

impl Serialize for ItemAndCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemAndCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}

pub type ItemSlot = Option<ItemAndCount>;
pub type ItemContainer = Vec<ItemSlot>;
/// Stacks keyed by bag key.
pub type ItemBag = BTreeMap<String, ItemAndCount>;
pub type ItemSet = BTreeMap<String, Item>;
/// Worn items keyed by wearable slot id.
pub type ItemAssignment = BTreeMap<EntityId, Item>;

pub type OwnedItemReferenceList = Vec<OwnedItemReference>;
/// Inventory slots paired with the stacks moved through them.
pub type InventoryAssignmentPattern = Vec<(OwnedItemReference, ItemAndCount)>;

/// A pointer into a player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OwnedItemReference {
    Item { idx: u16 },
    Hotbar { idx: u16 },
    Currency { key: String },
    Wearable { key: EntityId },
}

impl Default for OwnedItemReference {
    fn default() -> Self {
        OwnedItemReference::Item { idx: 0 }
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmoteType {
    Attack1,
    Attack2,
    Destroy,
    Place,
    Applause,
    Dance,
    Drink,
    Eat,
    Flex,
    Laugh,
    Point,
    Rock,
    Sick,
    Sit,
    Splash,
    Warp,
    WarpHome,
    Wave,
    FishingCastPull,
    FishingCastRelease,
    FishingIdle,
    FishingReel,
    FishingShow,
    DiggingHand,
    DiggingTool,
    Watering,
    Equip,
    Unequip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Employee,
    Admin,
    AdvancedOptions,
    DeleteGroup,
    HighlightGroup,
    UnplaceGroup,
    RepairGroup,
    SeeGremlins,
    SeeNpcs,
    Bless,
    Give,
    Flying,
    InternalSync,
    Export,
    Groundskeeper,
    Clone,
    Apply,
    TwoWayInbox,
    Baker,
    FarmingAdmin,
    OobNoCors,
    NoClip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinigameType {
    #[default]
    SimpleRace,
    Deathmatch,
    Spleef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifetimeStatsType {
    Collected,
    Crafted,
    Fished,
    Mined,
    Consumed,
    Grown,
    TakenPhoto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumptionAction {
    #[default]
    Drink,
    Eat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarpHomeReason {
    #[default]
    Respawn,
    Homestone,
    Admin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceableAnimationType {
    #[default]
    Open,
    Close,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationRepeatKind {
    Once,
    Repeat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    #[default]
    Normal,
    Selfie,
    Fps,
    Isometric,
    IsoNe,
    IsoNw,
    IsoSw,
    /// Retired; still accepted on read.
    IsoSe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AclAction {
    Shape,
    Place,
    Destroy,
    Interact,
    Administrate,
    CreateGroup,
    Dump,
    PlaceCampsite,
    TillSoil,
    PlantSeed,
    Pvp,
    #[serde(rename = "warp_from")]
    WarpFrom,
    #[serde(rename = "apply_buffs")]
    ApplyBuffs,
    PlaceRobot,
    PlaceEphemeral,
    DemuckerWand,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    #[default]
    Planted,
    Growing,
    FullyGrown,
    Dead,
    HaltedSun,
    HaltedShade,
    HaltedWater,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeState {
    #[default]
    Available,
    Completed,
    InProgress,
    Start,
}

pub type ChallengeStateMap = BTreeMap<EntityId, ChallengeState>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRestoreToState {
    #[default]
    Created,
    Deleted,
}

// ---------------------------------------------------------------------------
// Records and tagged unions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub skin_color_id: String,
    pub eye_color_id: String,
    pub hair_color_id: String,
    /// The wearable used as a head.
    pub head_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceableAnimation {
    #[serde(rename = "type")]
    pub kind: PlaceableAnimationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<AnimationRepeatKind>,
    pub start_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NpcDamageSource {
    DayNight,
    FarFromHome,
    AdminKill,
    OutOfWorldBounds,
}

/// What last hurt an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DamageSource {
    Suicide,
    DespawnWand,
    Block {
        #[serde(rename = "biscuitId")]
        biscuit_id: EntityId,
    },
    Fall {
        distance: f64,
    },
    Attack {
        attacker: EntityId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dir: Option<Vec3f>,
    },
    Drown,
    Fire,
    FireDamage,
    FireHeal,
    Heal,
    Npc {
        #[serde(rename = "type")]
        source: NpcDamageSource,
    },
}

// ---------------------------------------------------------------------------
// Geometry, buffs and player state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Box2 {
    pub v0: Vec3f,
    pub v1: Vec3f,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WarpTarget {
    pub warp_to: Vec3f,
    pub orientation: Vec2f,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceEventInfo {
    pub time: f64,
    pub position: Vec3i,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuxStatus {
    pub complete: bool,
    pub state_id: String,
}

/// Onboarding progress keyed by NUX id.
pub type AllNuxStatus = BTreeMap<i32, NuxStatus>;

/// An active buff granted by an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub item_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

/// Restricts what a grab bag may hand out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GrabBagFilter {
    Block {
        entity_ids: IdSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expiry: Option<f64>,
    },
    Only {
        entity_ids: IdSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expiry: Option<f64>,
    },
}

impl Default for GrabBagFilter {
    fn default() -> Self {
        GrabBagFilter::Block {
            entity_ids: IdSet::new(),
            expiry: None,
        }
    }
}

/// A shop slot: the stack on offer, its price and who listed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub contents: ItemAndCount,
    pub price: ItemAndCount,
    pub seller_id: EntityId,
}

pub type PricedItemSlot = Option<PricedItem>;
pub type PricedItemContainer = Vec<PricedItemSlot>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketedImageCloudBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp_320w: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp_640w: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp_1280w: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png_1280w: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp_original: Option<String>,
    pub bucket: ImageBucket,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageBucket {
    #[default]
    #[serde(rename = "biomes-social")]
    Social,
}

// ---------------------------------------------------------------------------
// Emotes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FishingLinePhysics {
    pub velocity: Vec3f,
    pub gravity: Vec3f,
    pub start: Vec3f,
}

/// Where the end of a fishing line is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FishingLineEnd {
    Physics(FishingLinePhysics),
    ReelIn { start: Vec3f, duration: f64 },
    Fixed { pos: Vec3f },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmoteFishingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_end_position: Option<FishingLineEnd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_end_item: Option<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmoteThrowInfo {
    pub physics: FishingLinePhysics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_velocity: Option<Vec2f>,
}

/// Extra state attached to an emote (fishing line, thrown item).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichEmoteComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fishing_info: Option<EmoteFishingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_info: Option<EmoteThrowInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_override: Option<Item>,
}

// ---------------------------------------------------------------------------
// Access control and restoration
// ---------------------------------------------------------------------------

pub type AclActionSet = BTreeSet<AclAction>;
/// Actions granted to one entity or team.
pub type TargetedAcl = Option<(EntityId, AclActionSet)>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    #[serde(default)]
    pub everyone: AclActionSet,
    #[serde(default, with = "pairs")]
    pub roles: BTreeMap<UserRole, AclActionSet>,
    #[serde(default, with = "pairs")]
    pub entities: BTreeMap<EntityId, AclActionSet>,
    #[serde(default, with = "pairs")]
    pub teams: BTreeMap<EntityId, AclActionSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: TargetedAcl,
    #[serde(
        rename = "creatorTeam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creator_team: TargetedAcl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionParams {
    pub acl: Acl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestorationParams {
    pub acl: Acl,
    pub restore_delay_s: f64,
}

/// One voxel waiting to be put back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainRestorationEntry {
    /// Flattened voxel offset within the shard.
    pub position_index: u16,
    pub created_at: f64,
    pub restore_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dye: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Volume {
    #[serde(rename = "box")]
    Cuboid {
        #[serde(rename = "box")]
        size: Vec3f,
    },
    Sphere {
        radius: f64,
    },
}

impl Default for Volume {
    fn default() -> Self {
        Volume::Cuboid { size: [0.0; 3] }
    }
}

// ---------------------------------------------------------------------------
// Farming
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FarmingPlayerAction {
    Water { amount: f64, timestamp: f64 },
    Fertilize { fertilizer: Item, timestamp: f64 },
    AdminDestroy { timestamp: f64 },
    Poke { timestamp: f64 },
}

// ---------------------------------------------------------------------------
// Minigames
// ---------------------------------------------------------------------------

/// Per-type minigame layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MinigameMetadata {
    SimpleRace {
        checkpoint_ids: IdSet,
        start_ids: IdSet,
        end_ids: IdSet,
    },
    Deathmatch {
        start_ids: IdSet,
    },
    Spleef {
        start_ids: IdSet,
        arena_marker_ids: IdSet,
    },
}

impl Default for MinigameMetadata {
    fn default() -> Self {
        MinigameMetadata::SimpleRace {
            checkpoint_ids: IdSet::new(),
            start_ids: IdSet::new(),
            end_ids: IdSet::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePlayerState {
    #[default]
    Waiting,
    Racing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointReached {
    pub time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleRaceInstanceState {
    pub player_state: RacePlayerState,
    pub started_at: f64,
    pub deaths: i32,
    #[serde(default, with = "pairs")]
    pub reached_checkpoints: BTreeMap<EntityId, CheckpointReached>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathmatchPlayerState {
    #[serde(rename = "playerId")]
    pub player_id: EntityId,
    pub kills: i32,
    pub deaths: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_kill: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_death: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeathmatchPhase {
    WaitingForPlayers {},
    PlayCountdown { round_start: f64 },
    Playing { round_end: f64 },
    Finished { timestamp: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathmatchInstanceState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_state: Option<DeathmatchPhase>,
    #[serde(default, with = "pairs")]
    pub player_states: BTreeMap<EntityId, DeathmatchPlayerState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TagRoundState {
    pub it_player: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpleefPhase {
    WaitingForPlayers {},
    RoundCountdown {
        round_start: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_winner_id: Option<EntityId>,
    },
    PlayingRound {
        round_expires: f64,
        alive_round_players: IdSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag_round_state: Option<TagRoundState>,
    },
}

impl Default for SpleefPhase {
    fn default() -> Self {
        SpleefPhase::WaitingForPlayers {}
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpleefPlayerStats {
    #[serde(rename = "playerId")]
    pub player_id: EntityId,
    pub rounds_won: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpleefInstanceState {
    pub instance_state: SpleefPhase,
    #[serde(default)]
    pub observer_spawn_points: Vec<Vec3f>,
    #[serde(default, with = "pairs")]
    pub player_stats: BTreeMap<EntityId, SpleefPlayerStats>,
    pub round_number: i32,
}

/// Live state of one running minigame instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MinigameInstanceState {
    SimpleRace(SimpleRaceInstanceState),
    Deathmatch(DeathmatchInstanceState),
    Spleef(SpleefInstanceState),
}

impl Default for MinigameInstanceState {
    fn default() -> Self {
        MinigameInstanceState::SimpleRace(SimpleRaceInstanceState::default())
    }
}

/// Where a player was before joining, so they can be sent back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivePlayerInfo {
    pub entry_stash_id: EntityId,
    pub entry_position: Vec3f,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_warped_to: Option<Vec3f>,
    pub entry_time: f64,
}

pub type ActivePlayerMap = BTreeMap<EntityId, ActivePlayerInfo>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipboardRegion {
    Aabb {
        #[serde(rename = "box")]
        bounds: Box2,
        clipboard_entity_id: EntityId,
    },
}

/// The space a minigame instance copied out and must paste back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceClipboardInfo {
    pub region: ClipboardRegion,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GiveMinigameKitData {
    #[default]
    SimpleRace,
    Deathmatch,
    Spleef,
}

// ---------------------------------------------------------------------------
// Teams and trades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberMetadata {
    pub joined_at: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamInvite {
    pub inviter_id: EntityId,
    pub invitee_id: EntityId,
    pub created_at: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamJoinRequest {
    pub entity_id: EntityId,
    pub created_at: f64,
}

pub type TeamMembers = BTreeMap<EntityId, TeamMemberMetadata>;
pub type TeamPendingInvites = BTreeMap<EntityId, TeamInvite>;

/// One side of a trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    pub id: EntityId,
    #[serde(default)]
    pub offer_assignment: InventoryAssignmentPattern,
    pub accepted: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSpec {
    pub trade_id: EntityId,
    pub id1: EntityId,
    pub id2: EntityId,
}

wire_via_serde!(
    Item,
    OwnedItemReference,
    EmoteType,
    UserRole,
    MinigameType,
    LifetimeStatsType,
    ConsumptionAction,
    WarpHomeReason,
    Appearance,
    PlaceableAnimation,
    PlaceableAnimationType,
    DamageSource,
    CameraMode,
    AclAction,
    PlantStatus,
    ChallengeState,
    EntityRestoreToState,
    Box2,
    WarpTarget,
    PlaceEventInfo,
    NuxStatus,
    Buff,
    GrabBagFilter,
    PricedItem,
    BucketedImageCloudBundle,
    RichEmoteComponents,
    Acl,
    ProtectionParams,
    RestorationParams,
    TerrainRestorationEntry,
    Volume,
    FarmingPlayerAction,
    MinigameMetadata,
    MinigameInstanceState,
    ActivePlayerInfo,
    SpaceClipboardInfo,
    GiveMinigameKitData,
    TeamMemberMetadata,
    TeamInvite,
    TeamJoinRequest,
    Trader,
    TradeSpec,
);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
