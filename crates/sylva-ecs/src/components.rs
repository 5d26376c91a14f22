//! Component definitions.
//!
//! Field tags are permanent: a removed field leaves its tag unused forever.
//! Quest trigger trees belong to the quest engine and are carried as opaque
//! [`Value`]s.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::component;
use crate::entity::EntityId;
use crate::types::{
    Acl, ActivePlayerMap, AllNuxStatus, Appearance, Box2, BucketedImageCloudBundle, Buff,
    CameraMode, DamageSource, EmoteType, EntityRestoreToState, FarmingPlayerAction,
    GrabBagFilter, IdList, IdSet, IdTimes, Item, ItemAssignment, ItemBag, ItemContainer, ItemSet,
    ItemSlot, LifetimeStatsType, MinigameInstanceState, MinigameMetadata, MinigameType,
    OwnedItemReference, PlaceEventInfo, PlaceableAnimation, PlantStatus, PricedItemContainer,
    ProtectionParams, RestorationParams, RichEmoteComponents, SpaceClipboardInfo, TeamJoinRequest,
    TeamMembers, TeamPendingInvites, TerrainRestorationEntry, TradeSpec, Trader, UserRole, Vec2f,
    Vec3f, Vec3i, Volume,
};
use crate::wire::Buffer;

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

component! {
    /// Frozen in place; excluded from simulation.
    pub struct Iced {}
}

component! {
    /// Backed by a live player connection.
    pub struct RemoteConnection {}
}

component! { pub struct CraftingStationComponent {} }
component! { pub struct Gremlin {} }
component! { pub struct AdminEntity {} }
component! { pub struct Collideable {} }
component! { pub struct LockedInPlace {} }
component! { pub struct Idle {} }

// ---------------------------------------------------------------------------
// Spatial
// ---------------------------------------------------------------------------

component! {
    pub struct Position {
        1 => v: Vec3f,
    }
}

component! {
    /// Pitch and yaw.
    pub struct Orientation {
        1 => v: Vec2f,
    }
}

component! {
    pub struct RigidBody {
        3 => velocity: Vec3f,
    }
}

component! {
    pub struct Size {
        3 => v: Vec3f,
    }
}

component! {
    /// Integer bounds of a world region (`box` on the wire).
    pub struct BoxBounds {
        1 => v0: Vec3i,
        2 => v1: Vec3i,
    }
}

component! {
    pub struct Warpable {
        2 => trigger_at: f64,
        3 => warp_to: Vec3f,
        4 => orientation: Vec2f,
        5 => owner: EntityId,
    }
}

component! {
    /// A pending teleport for the owning player.
    pub struct WarpingTo {
        1 => position: Vec3f,
        2 => orientation: Option<Vec2f>,
        3 => set_at: f64,
    }
}

component! {
    pub struct WorldMetadata {
        1 => aabb: Box2,
    }
}

// ---------------------------------------------------------------------------
// Terrain shards
// ---------------------------------------------------------------------------

component! { pub struct ShardSeed { 3 => buffer: Buffer } }
component! { pub struct ShardDiff { 4 => buffer: Buffer } }
component! { pub struct ShardShapes { 3 => buffer: Buffer } }
component! { pub struct ShardSkyOcclusion { 3 => buffer: Buffer } }
component! { pub struct ShardIrradiance { 3 => buffer: Buffer } }
component! { pub struct ShardWater { 3 => buffer: Buffer } }
component! { pub struct ShardOccupancy { 3 => buffer: Buffer } }
component! { pub struct ShardDye { 1 => buffer: Buffer } }
component! { pub struct ShardMoisture { 1 => buffer: Buffer } }
component! { pub struct ShardGrowth { 1 => buffer: Buffer } }
component! { pub struct ShardPlacer { 3 => buffer: Buffer } }
component! { pub struct ShardMuck { 1 => buffer: Buffer } }
component! { pub struct ShardFarming { 3 => buffer: Buffer } }

// ---------------------------------------------------------------------------
// Items and inventories
// ---------------------------------------------------------------------------

component! {
    pub struct GrabBag {
        1 => slots: ItemBag,
        3 => filter: GrabBagFilter,
        4 => mined: bool,
    }
}

component! {
    pub struct Acquisition {
        1 => acquired_by: EntityId,
        3 => items: ItemBag,
    }
}

component! {
    pub struct LooseItem {
        1 => item: Item,
    }
}

component! {
    /// A player's own inventory. Only the owner and the server see it.
    pub struct Inventory {
        6 => items: ItemContainer,
        7 => currencies: ItemBag,
        8 => hotbar: ItemContainer,
        9 => selected: OwnedItemReference,
        10 => overflow: ItemBag,
    }
}

component! {
    pub struct ContainerInventory {
        1 => items: ItemContainer,
    }
}

component! {
    pub struct PricedContainerInventory {
        1 => items: PricedItemContainer,
        2 => infinite_capacity: bool,
    }
}

component! {
    pub struct SelectedItem {
        1 => item: ItemSlot,
    }
}

component! {
    pub struct Wearing {
        2 => items: ItemAssignment,
    }
}

component! {
    pub struct RecipeBook {
        4 => recipes: ItemSet,
    }
}

component! {
    pub struct ItemBuyer {
        2 => attribute_ids: IdList,
        3 => buy_description: Option<String>,
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

component! {
    pub struct Label {
        1 => text: String,
    }
}

component! {
    pub struct Emote {
        1 => emote_type: Option<EmoteType>,
        2 => emote_start_time: f64,
        3 => emote_expiry_time: f64,
        5 => rich_emote_components: Option<RichEmoteComponents>,
        6 => emote_nonce: Option<f64>,
    }
}

component! {
    pub struct AppearanceComponent {
        1 => appearance: Appearance,
    }
}

component! {
    pub struct Challenges {
        7 => in_progress: IdSet,
        8 => complete: IdSet,
        9 => available: IdSet,
        10 => started_at: IdTimes,
        11 => finished_at: IdTimes,
    }
}

component! {
    pub struct PlayerStatus {
        1 => init: bool,
        9 => nux_status: AllNuxStatus,
    }
}

component! {
    pub struct PlayerBehavior {
        1 => camera_mode: CameraMode,
        2 => place_event_info: Option<PlaceEventInfo>,
    }
}

component! {
    pub struct Health {
        1 => hp: i32,
        2 => max_hp = "maxHp": i32,
        3 => last_damage_source = "lastDamageSource": Option<DamageSource>,
        4 => last_damage_time = "lastDamageTime": Option<f64>,
        5 => last_damage_inventory_consequence = "lastDamageInventoryConsequence": Option<ItemBag>,
        6 => last_damage_amount = "lastDamageAmount": Option<i32>,
    }
}

component! {
    pub struct BuffsComponent {
        1 => buffs: Vec<Buff>,
        2 => trigger_at: Option<f64>,
    }
}

component! {
    /// Quest trigger progress, keyed by root trigger id.
    pub struct TriggerState {
        3 => by_root: BTreeMap<EntityId, Value>,
    }
}

component! {
    pub struct LifetimeStats {
        3 => stats: BTreeMap<LifetimeStatsType, ItemBag>,
    }
}

component! {
    pub struct PlayerSession {
        1 => id: String,
    }
}

component! {
    pub struct PresetApplied {
        1 => preset_id: EntityId,
        2 => applier_id: EntityId,
        3 => applied_at: f64,
    }
}

component! {
    pub struct PresetPrototype {
        1 => last_updated: f64,
        2 => last_updated_by: EntityId,
    }
}

component! {
    pub struct PlayerCurrentTeam {
        1 => team_id: EntityId,
    }
}

component! {
    pub struct UserRoles {
        1 => roles: BTreeSet<UserRole>,
    }
}

component! {
    pub struct DeathInfo {
        1 => last_death_pos: Option<Vec3f>,
        2 => last_death_time: Option<f64>,
    }
}

component! {
    pub struct Voice {
        1 => voice: String,
    }
}

component! {
    pub struct GiftGiver {
        1 => last_gift_time: Option<f64>,
        2 => gift_targets: IdList,
    }
}

component! {
    pub struct ProfilePic {
        1 => cloud_bundle: BucketedImageCloudBundle,
        2 => hash: Option<String>,
    }
}

// ---------------------------------------------------------------------------
// NPCs and robots
// ---------------------------------------------------------------------------

component! {
    pub struct NpcMetadata {
        1 => type_id: EntityId,
        3 => created_time: f64,
        4 => spawn_event_type_id: Option<EntityId>,
        5 => spawn_event_id: Option<EntityId>,
        6 => spawn_position: Vec3f,
        7 => spawn_orientation: Vec2f,
    }
}

component! {
    /// Serialized behavior state. Server only.
    pub struct NpcState {
        2 => data: Buffer,
    }
}

component! {
    pub struct QuestGiver {
        1 => concurrent_quests: Option<i32>,
        2 => concurrent_quest_dialog: Option<String>,
    }
}

component! {
    pub struct DefaultDialog {
        1 => text: String,
        2 => modified_at: Option<f64>,
        3 => modified_by: Option<EntityId>,
    }
}

component! {
    pub struct RobotComponent {
        1 => trigger_at: Option<f64>,
        2 => internal_battery_charge: Option<f64>,
        3 => internal_battery_capacity: Option<f64>,
        4 => last_update: Option<f64>,
    }
}

// ---------------------------------------------------------------------------
// Groups, deeds and placeables
// ---------------------------------------------------------------------------

component! {
    pub struct GroupComponent {
        6 => tensor: String,
    }
}

component! {
    pub struct GroupPreviewReference {
        1 => reference = "ref": Option<EntityId>,
    }
}

component! {
    pub struct AclComponent {
        1 => acl: Acl,
    }
}

component! {
    pub struct DeedComponent {
        1 => owner: EntityId,
        2 => description: String,
        3 => plots: IdList,
        4 => custom_owner_name: Option<String>,
        5 => map_display_size: Option<u32>,
    }
}

component! {
    pub struct GroupPreviewComponent {
        1 => owner_id: EntityId,
        2 => blueprint_id: Option<EntityId>,
    }
}

component! {
    pub struct BlueprintComponent {
        1 => owner_id: EntityId,
        2 => blueprint_id: EntityId,
    }
}

component! {
    pub struct PlaceableComponent {
        2 => item_id: EntityId,
        3 => animation: Option<PlaceableAnimation>,
    }
}

component! {
    pub struct GroupedEntities {
        1 => ids: IdList,
    }
}

component! {
    pub struct InGroup {
        1 => id: EntityId,
    }
}

component! {
    pub struct PictureFrameContents {
        1 => placer_id: EntityId,
        2 => photo_id: Option<EntityId>,
        4 => minigame_id: Option<EntityId>,
    }
}

component! {
    pub struct OccupancyComponent {
        3 => buffer: Option<Buffer>,
    }
}

component! {
    pub struct VideoComponent {
        1 => video_url: Option<String>,
        2 => video_start_time: Option<f64>,
        3 => muted: Option<bool>,
    }
}

component! {
    pub struct FarmingPlantComponent {
        1 => planter: EntityId,
        2 => seed: EntityId,
        3 => plant_time: f64,
        4 => last_tick: f64,
        5 => stage: i32,
        6 => stage_progress: f64,
        7 => water_level: f64,
        8 => wilt: f64,
        9 => expected_blocks: Option<String>,
        10 => status: PlantStatus,
        11 => variant: Option<i32>,
        12 => buffs: IdList,
        14 => water_at: Option<f64>,
        15 => player_actions: Vec<FarmingPlayerAction>,
        16 => fully_grown_at: Option<f64>,
        17 => next_stage_at: Option<f64>,
    }
}

component! {
    pub struct CreatedBy {
        1 => id: EntityId,
        2 => created_at: f64,
    }
}

component! {
    /// Removed from the world but recoverable.
    pub struct Stashed {
        1 => stashed_at: f64,
        2 => stashed_by: EntityId,
        3 => original_entity_id: EntityId,
    }
}

component! {
    pub struct PlacerComponent {
        3 => buffer: Option<Buffer>,
    }
}

component! {
    pub struct Unmuck {
        2 => volume: Volume,
        3 => snap_to_grid = "snapToGrid": Option<u32>,
    }
}

component! {
    pub struct Protection {
        1 => timestamp: Option<f64>,
    }
}

component! {
    pub struct ProjectsProtection {
        1 => protection_child_id = "protectionChildId": Option<EntityId>,
        2 => size: Vec3f,
        3 => protection: Option<ProtectionParams>,
        4 => restoration: Option<RestorationParams>,
        5 => restoration_child_id = "restorationChildId": Option<EntityId>,
        6 => timestamp: Option<f64>,
        7 => snap_to_grid = "snapToGrid": Option<u32>,
    }
}

component! {
    /// Deleted together with the referenced entity.
    pub struct DeletesWith {
        1 => id: EntityId,
    }
}

component! {
    pub struct InspectionTweaks {
        1 => hidden: Option<bool>,
    }
}

component! {
    pub struct EntityDescription {
        1 => text: String,
    }
}

component! {
    pub struct Landmark {
        1 => override_name: Option<String>,
        2 => importance: Option<u32>,
    }
}

component! {
    pub struct Restoration {
        1 => timestamp: Option<f64>,
        2 => restore_delay_s: f64,
    }
}

component! {
    pub struct TerrainRestorationDiff {
        6 => restores: Vec<TerrainRestorationEntry>,
    }
}

component! {
    pub struct RestoresTo {
        1 => trigger_at: f64,
        2 => restore_to_state: EntityRestoreToState,
        3 => expire: Option<bool>,
    }
}

component! {
    pub struct PlacedBy {
        1 => id: EntityId,
        2 => placed_at: f64,
    }
}

component! {
    pub struct TextSign {
        1 => text: Vec<String>,
    }
}

component! {
    pub struct Irradiance {
        1 => intensity: u8,
        2 => color: Vec3f,
    }
}

// ---------------------------------------------------------------------------
// Minigames, teams and trades
// ---------------------------------------------------------------------------

component! {
    pub struct MinigameComponent {
        1 => metadata: MinigameMetadata,
        2 => stats_changed_at: Option<f64>,
        3 => ready: bool,
        4 => minigame_element_ids: IdSet,
        5 => active_instance_ids: IdSet,
        6 => hero_photo_id: Option<EntityId>,
        7 => minigame_settings: Option<Buffer>,
        8 => entry_price: Option<f64>,
        10 => game_modified_at: Option<f64>,
    }
}

component! {
    pub struct MinigameInstance {
        1 => state: MinigameInstanceState,
        2 => minigame_id: EntityId,
        3 => finished: bool,
        4 => active_players: ActivePlayerMap,
        6 => space_clipboard: Option<SpaceClipboardInfo>,
        7 => instance_element_ids: IdSet,
    }
}

component! {
    pub struct PlayingMinigame {
        1 => minigame_id: EntityId,
        2 => minigame_instance_id: EntityId,
        3 => minigame_type: MinigameType,
    }
}

component! {
    pub struct MinigameElement {
        1 => minigame_id: EntityId,
    }
}

component! {
    pub struct ActiveTray {
        1 => id: EntityId,
    }
}

component! {
    pub struct MinigameInstanceTickInfo {
        1 => last_tick: f64,
        2 => trigger_at: f64,
    }
}

component! {
    pub struct MinigameInstanceExpire {
        1 => trigger_at: f64,
    }
}

component! {
    pub struct Expires {
        1 => trigger_at: f64,
    }
}

component! {
    pub struct Icing {
        1 => trigger_at: f64,
    }
}

component! {
    pub struct Team {
        1 => members: TeamMembers,
        2 => pending_invites: TeamPendingInvites,
        3 => icon: Option<String>,
        4 => color: Option<i32>,
        5 => hero_photo_id: Option<EntityId>,
        6 => pending_requests: Vec<TeamJoinRequest>,
    }
}

component! {
    pub struct Trade {
        1 => trader1: Trader,
        2 => trader2: Trader,
        3 => trigger_at: Option<f64>,
    }
}

component! {
    pub struct ActiveTrades {
        1 => trades: Vec<TradeSpec>,
    }
}

component! {
    pub struct SyntheticStats {
        1 => online_players: u32,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
