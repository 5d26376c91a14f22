//! Event payload declarations.
//!
//! Every payload is declared once in the `events!` table below as
//! `Variant(PayloadStruct) = "wireKind" { field: Type, ... }`. A field whose
//! property name differs from the Rust identifier is written
//! `field = "wireName": Type`.

use serde_json::{Map, Value};

use sylva_ecs::entity::EntityId;
use sylva_ecs::types::{
    Aabb, Appearance, Box2, Buff, CameraMode, ChallengeStateMap, ConsumptionAction, DamageSource,
    EmoteType, GiveMinigameKitData, IdList, InventoryAssignmentPattern, Item, ItemAndCount,
    ItemBag, MinigameType, NuxStatus, OwnedItemReference, OwnedItemReferenceList,
    PlaceableAnimationType, RichEmoteComponents, SpaceClipboardInfo, TensorBlob, TerrainUpdate,
    Vec2f, Vec3f, Vec3i, WarpHomeReason, WarpTarget,
};
use sylva_ecs::wire::Buffer;

use crate::codec::{get_field, put_field, EventPayload};
use crate::EventError;

macro_rules! events {
    (@name $field:ident) => { stringify!($field) };
    (@name $field:ident $wire:literal) => { $wire };
    (
        $(
            $(#[$meta:meta])*
            $variant:ident($payload:ident) = $kind:literal {
                $( $field:ident $(= $wire:literal)? : $ty:ty ),* $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Default)]
            pub struct $payload {
                $( pub $field: $ty, )*
            }

            impl EventPayload for $payload {
                const KIND: &'static str = $kind;

                fn encode_fields(&self, out: &mut Map<String, Value>) {
                    $( put_field(out, events!(@name $field $($wire)?), &self.$field); )*
                }

                #[allow(unused_variables)]
                fn decode_fields(map: &Map<String, Value>) -> Result<Self, EventError> {
                    Ok(Self {
                        $( $field: get_field(map, $kind, events!(@name $field $($wire)?))?, )*
                    })
                }
            }

            impl From<$payload> for Event {
                fn from(payload: $payload) -> Self {
                    Event::$variant(payload)
                }
            }
        )*

        /// Every known command/event payload.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $( $variant($payload), )*
        }

        impl Event {
            /// Every recognised `kind`, in declaration order.
            pub const KINDS: &'static [&'static str] = &[ $( $kind, )* ];

            /// The wire discriminator.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Event::$variant(_) => $kind, )*
                }
            }

            pub(crate) fn encode_fields(&self, out: &mut Map<String, Value>) {
                match self {
                    $( Event::$variant(payload) => payload.encode_fields(out), )*
                }
            }

            /// `None` when `kind` is not recognised.
            pub(crate) fn decode_kind(
                kind: &str,
                map: &Map<String, Value>,
            ) -> Option<Result<Event, EventError>> {
                match kind {
                    $( $kind => Some($payload::decode_fields(map).map(Event::$variant)), )*
                    _ => None,
                }
            }
        }
    };
}

events! {
    // -- movement and presence ------------------------------------------------

    DisconnectPlayer(DisconnectPlayerEvent) = "disconnectPlayerEvent" {
        id: EntityId,
    },
    Move(MoveEvent) = "moveEvent" {
        id: EntityId,
        position: Option<Vec3f>,
        velocity: Option<Vec3f>,
        orientation: Option<Vec2f>,
    },
    IdleChange(IdleChangeEvent) = "idleChangeEvent" {
        id: EntityId,
        idle: bool,
    },
    EnterRobotField(EnterRobotFieldEvent) = "enterRobotFieldEvent" {
        id: EntityId,
        robot_id: EntityId,
    },
    /// Paid teleport; `royalty` goes to `royaltyTarget` when set.
    Warp(WarpEvent) = "warpEvent" {
        id: EntityId,
        position: Vec3f,
        orientation: Option<Vec2f>,
        cost: u64,
        royalty: u64,
        royalty_target = "royaltyTarget": Option<EntityId>,
    },
    WarpHome(WarpHomeEvent) = "warpHomeEvent" {
        id: EntityId,
        position: Vec3f,
        orientation: Vec2f,
        reason: WarpHomeReason,
    },

    // -- terrain --------------------------------------------------------------

    Edit(EditEvent) = "editEvent" {
        id: EntityId,
        position: Vec3i,
        value: u32,
        user_id: EntityId,
        tool_ref: OwnedItemReference,
        blueprint_entity_id: Option<EntityId>,
        blueprint_completed: Option<bool>,
    },
    Shape(ShapeEvent) = "shapeEvent" {
        id: EntityId,
        position: Vec3i,
        isomorphism: u32,
        user_id: EntityId,
        tool_ref: OwnedItemReference,
        blueprint_entity_id: Option<EntityId>,
        blueprint_completed: Option<bool>,
    },
    Farming(FarmingEvent) = "farmingEvent" {
        id: EntityId,
        updates: Vec<TerrainUpdate>,
    },
    DumpWater(DumpWaterEvent) = "dumpWaterEvent" {
        id: EntityId,
        pos: Vec3i,
    },
    ScoopWater(ScoopWaterEvent) = "scoopWaterEvent" {
        id: EntityId,
        pos: Vec3i,
    },

    // -- inventory ------------------------------------------------------------

    InventoryCombine(InventoryCombineEvent) = "inventoryCombineEvent" {
        player_id: EntityId,
        src_id: EntityId,
        src: OwnedItemReference,
        dst_id: Option<EntityId>,
        dst: OwnedItemReference,
        count: u64,
        positions: Vec<Vec3i>,
    },
    InventorySplit(InventorySplitEvent) = "inventorySplitEvent" {
        player_id: EntityId,
        src_id: EntityId,
        src: OwnedItemReference,
        dst_id: Option<EntityId>,
        dst: OwnedItemReference,
        count: u64,
        positions: Vec<Vec3i>,
    },
    InventorySort(InventorySortEvent) = "inventorySortEvent" {
        id: EntityId,
    },
    InventorySwap(InventorySwapEvent) = "inventorySwapEvent" {
        player_id: EntityId,
        src_id: EntityId,
        src: OwnedItemReference,
        dst_id: Option<EntityId>,
        dst: OwnedItemReference,
        positions: Vec<Vec3i>,
    },
    RobotInventorySwap(RobotInventorySwapEvent) = "robotInventorySwapEvent" {
        id: EntityId,
        src: OwnedItemReference,
        dst: OwnedItemReference,
        dst_id: EntityId,
    },
    InventoryThrow(InventoryThrowEvent) = "inventoryThrowEvent" {
        id: EntityId,
        src: OwnedItemReference,
        count: Option<u64>,
        position: Vec3f,
    },
    InventoryDestroy(InventoryDestroyEvent) = "inventoryDestroyEvent" {
        id: EntityId,
        src: OwnedItemReference,
        count: Option<u64>,
    },
    DyeBlock(DyeBlockEvent) = "dyeBlockEvent" {
        id: EntityId,
        dye: u8,
        position: Vec3i,
        user_id: EntityId,
    },
    Unmucker(UnmuckerEvent) = "unmuckerEvent" {
        id: EntityId,
        unmucker: Option<bool>,
    },
    /// Load-testing only.
    InternalInventorySet(InternalInventorySetEvent) = "internalInventorySetEvent" {
        id: EntityId,
        dst: OwnedItemReference,
        item: Option<ItemAndCount>,
    },
    InventoryCraft(InventoryCraftEvent) = "inventoryCraftEvent" {
        id: EntityId,
        recipe: Item,
        slot_refs: OwnedItemReferenceList,
        station_entity_id = "stationEntityId": EntityId,
    },
    InventoryDye(InventoryDyeEvent) = "inventoryDyeEvent" {
        id: EntityId,
        src: OwnedItemReference,
        dst: OwnedItemReference,
    },
    InventoryCook(InventoryCookEvent) = "inventoryCookEvent" {
        id: EntityId,
        src: InventoryAssignmentPattern,
        station_entity_id = "stationEntityId": EntityId,
    },
    InventoryCompost(InventoryCompostEvent) = "inventoryCompostEvent" {
        id: EntityId,
        src: InventoryAssignmentPattern,
        station_entity_id = "stationEntityId": EntityId,
    },
    InventoryChangeSelection(InventoryChangeSelectionEvent) = "inventoryChangeSelectionEvent" {
        id: EntityId,
        reference = "ref": OwnedItemReference,
    },
    ChangeCameraMode(ChangeCameraModeEvent) = "changeCameraModeEvent" {
        id: EntityId,
        mode: CameraMode,
    },
    OverflowMoveToInventory(OverflowMoveToInventoryEvent) = "overflowMoveToInventoryEvent" {
        id: EntityId,
        payload: ItemBag,
        dst: Option<OwnedItemReference>,
    },
    InventoryMoveToOverflow(InventoryMoveToOverflowEvent) = "inventoryMoveToOverflowEvent" {
        id: EntityId,
        src: OwnedItemReference,
        count: u64,
    },

    // -- appearance and placeables --------------------------------------------

    AppearanceChange(AppearanceChangeEvent) = "appearanceChangeEvent" {
        id: EntityId,
        appearance: Appearance,
    },
    HairTransplant(HairTransplantEvent) = "hairTransplantEvent" {
        id: EntityId,
        new_hair_id = "newHairId": Option<EntityId>,
    },
    Emote(EmoteEvent) = "emoteEvent" {
        id: EntityId,
        emote_type: Option<EmoteType>,
        nonce: Option<f64>,
        rich_emote_components: Option<RichEmoteComponents>,
        start_time: Option<f64>,
        expiry_time: Option<f64>,
    },
    StartPlaceableAnimation(StartPlaceableAnimationEvent) = "startPlaceableAnimationEvent" {
        id: EntityId,
        animation_type: PlaceableAnimationType,
    },
    PlacePlaceable(PlacePlaceableEvent) = "placePlaceableEvent" {
        id: EntityId,
        placeable_item: Item,
        inventory_item: Item,
        inventory_ref: OwnedItemReference,
        position: Vec3f,
        orientation: Vec2f,
        minigame_id: Option<EntityId>,
        existing_placeable: Option<EntityId>,
    },
    DestroyPlaceable(DestroyPlaceableEvent) = "destroyPlaceableEvent" {
        id: EntityId,
        user_id: EntityId,
        tool_ref: OwnedItemReference,
        expired: Option<bool>,
    },
    ChangePictureFrameContents(ChangePictureFrameContentsEvent) =
        "changePictureFrameContentsEvent"
    {
        id: EntityId,
        user_id: EntityId,
        photo_id: Option<EntityId>,
        minigame_id: Option<EntityId>,
    },
    ChangeTextSignContents(ChangeTextSignContentsEvent) = "changeTextSignContentsEvent" {
        id: EntityId,
        user_id: EntityId,
        text: Vec<String>,
    },
    UpdateVideoSettings(UpdateVideoSettingsEvent) = "updateVideoSettingsEvent" {
        id: EntityId,
        user_id: EntityId,
        video_url: Option<String>,
        muted: bool,
    },

    // -- shops and robots -----------------------------------------------------

    SellInContainer(SellInContainerEvent) = "sellInContainerEvent" {
        id: EntityId,
        seller_id: EntityId,
        src: OwnedItemReference,
        sell_item: ItemAndCount,
        dst_slot: OwnedItemReference,
        dst_price: ItemAndCount,
    },
    PurchaseFromContainer(PurchaseFromContainerEvent) = "purchaseFromContainerEvent" {
        id: EntityId,
        purchaser_id: EntityId,
        seller_id: EntityId,
        src: OwnedItemReference,
        quantity: Option<u32>,
    },
    UpdateRobotName(UpdateRobotNameEvent) = "updateRobotNameEvent" {
        id: EntityId,
        player_id: EntityId,
        entity_id: EntityId,
        name: String,
    },
    PlaceRobot(PlaceRobotEvent) = "placeRobotEvent" {
        id: EntityId,
        robot_entity_id: Option<EntityId>,
        inventory_ref: OwnedItemReference,
        position: Vec3f,
        orientation: Vec2f,
        item_id: EntityId,
    },
    EndPlaceRobot(EndPlaceRobotEvent) = "endPlaceRobotEvent" {
        id: EntityId,
        robot_entity_id: EntityId,
        position: Vec3f,
        orientation: Vec2f,
    },
    PickUpRobot(PickUpRobotEvent) = "pickUpRobotEvent" {
        id: EntityId,
        player_id: EntityId,
        entity_id: EntityId,
    },
    UpdateProjectedRestoration(UpdateProjectedRestorationEvent) =
        "updateProjectedRestorationEvent"
    {
        id: EntityId,
        player_id: EntityId,
        entity_id: EntityId,
        restore_delay_s: Option<f64>,
    },
    LabelChange(LabelChangeEvent) = "labelChangeEvent" {
        id: EntityId,
        text: String,
    },

    // -- groups and blueprints ------------------------------------------------

    CreateGroup(CreateGroupEvent) = "createGroupEvent" {
        id: EntityId,
        user_id: EntityId,
        name: String,
        warp: Option<WarpTarget>,
        tensor: TensorBlob,
        bounds = "box": Box2,
        placeable_ids: IdList,
        position: Vec3f,
    },
    PlaceBlueprint(PlaceBlueprintEvent) = "placeBlueprintEvent" {
        id: EntityId,
        inventory_ref: OwnedItemReference,
        item: EntityId,
        position: Vec3f,
        orientation: Vec2f,
    },
    DestroyBlueprint(DestroyBlueprintEvent) = "destroyBlueprintEvent" {
        id: EntityId,
        user_id: EntityId,
        tool_ref: OwnedItemReference,
        position: Vec3f,
    },
    CreateCraftingStation(CreateCraftingStationEvent) = "createCraftingStationEvent" {
        id: EntityId,
        user_id: EntityId,
    },
    FeedRobot(FeedRobotEvent) = "feedRobotEvent" {
        id: EntityId,
        user_id: EntityId,
        amount: u64,
    },
    PlaceGroup(PlaceGroupEvent) = "placeGroupEvent" {
        id: EntityId,
        user_id: EntityId,
        inventory_ref: OwnedItemReference,
        warp: WarpTarget,
        bounds = "box": Box2,
        rotation: Option<u32>,
        reflection: Option<Vec3f>,
        tensor: TensorBlob,
        name: String,
    },
    CloneGroup(CloneGroupEvent) = "cloneGroupEvent" {
        id: EntityId,
        user_id: EntityId,
        inventory_ref: OwnedItemReference,
        bounds = "box": Box2,
        rotation: Option<u32>,
        reflection: Option<Vec3f>,
        tensor: TensorBlob,
    },
    DestroyGroup(DestroyGroupEvent) = "destroyGroupEvent" {
        id: EntityId,
        user_id: EntityId,
        position: Vec3f,
        tool_ref: OwnedItemReference,
        rotation: Option<u32>,
        placeable_ids: IdList,
    },
    CaptureGroup(CaptureGroupEvent) = "captureGroupEvent" {
        id: EntityId,
        user_id: EntityId,
    },
    UnGroup(UnGroupEvent) = "unGroupEvent" {
        id: EntityId,
        user_id: EntityId,
        remove_voxels: bool,
    },
    RepairGroup(RepairGroupEvent) = "repairGroupEvent" {
        id: EntityId,
        user_id: EntityId,
    },
    UpdateGroupPreview(UpdateGroupPreviewEvent) = "updateGroupPreviewEvent" {
        id: EntityId,
        tensor: TensorBlob,
        bounds = "box": Box2,
        blueprint_id: Option<EntityId>,
    },
    DeleteGroupPreview(DeleteGroupPreviewEvent) = "deleteGroupPreviewEvent" {
        id: EntityId,
    },
    RestoreGroup(RestoreGroupEvent) = "restoreGroupEvent" {
        id: EntityId,
        placeable_ids: IdList,
        restore_region = "restoreRegion": Option<Aabb>,
    },
    RestorePlaceable(RestorePlaceableEvent) = "restorePlaceableEvent" {
        id: EntityId,
        restore_region = "restoreRegion": Option<Aabb>,
    },
    CreatePhotoPortal(CreatePhotoPortalEvent) = "createPhotoPortalEvent" {
        id: EntityId,
        photo_id: EntityId,
        photo_author_id: EntityId,
        position: Vec3f,
        orientation: Vec2f,
    },

    // -- consumption and buffs ------------------------------------------------

    Consumption(ConsumptionEvent) = "consumptionEvent" {
        id: EntityId,
        item_id: EntityId,
        inventory_ref: OwnedItemReference,
        action: ConsumptionAction,
    },
    RemoveBuff(RemoveBuffEvent) = "removeBuffEvent" {
        id: EntityId,
        buff: Buff,
    },

    // -- admin ----------------------------------------------------------------

    AdminInventoryGroup(AdminInventoryGroupEvent) = "adminInventoryGroupEvent" {
        id: EntityId,
        user_id: EntityId,
    },
    AdminResetChallenges(AdminResetChallengesEvent) = "adminResetChallengesEvent" {
        id: EntityId,
        challenge_states: ChallengeStateMap,
    },
    AdminResetRecipe(AdminResetRecipeEvent) = "adminResetRecipeEvent" {
        id: EntityId,
        recipe_id: EntityId,
        clear_all: Option<bool>,
    },
    AdminResetInventory(AdminResetInventoryEvent) = "adminResetInventoryEvent" {
        id: EntityId,
        user_id: EntityId,
    },
    AdminSetInfiniteCapacityContainer(AdminSetInfiniteCapacityContainerEvent) =
        "adminSetInfiniteCapacityContainerEvent"
    {
        id: EntityId,
        infinite_capacity: bool,
    },
    AdminGiveItem(AdminGiveItemEvent) = "adminGiveItemEvent" {
        id: EntityId,
        bag: ItemBag,
        to_overflow = "toOverflow": Option<bool>,
    },
    AdminRemoveItem(AdminRemoveItemEvent) = "adminRemoveItemEvent" {
        id: EntityId,
        reference = "ref": OwnedItemReference,
    },
    AdminDelete(AdminDeleteEvent) = "adminDeleteEvent" {
        id: EntityId,
        entity_id: EntityId,
    },
    AdminIce(AdminIceEvent) = "adminIceEvent" {
        id: EntityId,
        entity_id: EntityId,
    },

    // -- player state ---------------------------------------------------------

    PlayerInit(PlayerInitEvent) = "playerInitEvent" {
        id: EntityId,
    },
    UpdatePlayerHealth(UpdatePlayerHealthEvent) = "updatePlayerHealthEvent" {
        id: EntityId,
        hp: Option<i32>,
        hp_delta = "hpDelta": Option<i32>,
        max_hp = "maxHp": Option<i32>,
        damage_source = "damageSource": Option<DamageSource>,
    },
    UpdateNpcHealth(UpdateNpcHealthEvent) = "updateNpcHealthEvent" {
        id: EntityId,
        hp: i32,
        damage_source = "damageSource": Option<DamageSource>,
    },
    PickUp(PickUpEvent) = "pickUpEvent" {
        id: EntityId,
        item: EntityId,
    },
    RemoveMapBeam(RemoveMapBeamEvent) = "removeMapBeamEvent" {
        id: EntityId,
        beam_client_id: i32,
        beam_location: Vec2f,
    },
    SetNuxStatus(SetNuxStatusEvent) = "setNUXStatusEvent" {
        id: EntityId,
        nux_id: i32,
        status: NuxStatus,
    },

    // -- challenges and presets -----------------------------------------------

    AcceptChallenge(AcceptChallengeEvent) = "acceptChallengeEvent" {
        id: EntityId,
        challenge_id: EntityId,
        npc_id: EntityId,
        chosen_gift_index: i32,
    },
    CompleteQuestStepAtEntity(CompleteQuestStepAtEntityEvent) = "completeQuestStepAtEntityEvent" {
        id: EntityId,
        challenge_id: EntityId,
        entity_id: EntityId,
        step_id: EntityId,
        chosen_reward_index: i32,
    },
    ResetChallenge(ResetChallengeEvent) = "resetChallengeEvent" {
        id: EntityId,
        challenge_id: EntityId,
    },
    ExpireBuffs(ExpireBuffsEvent) = "expireBuffsEvent" {
        id: EntityId,
    },
    ExpireRobot(ExpireRobotEvent) = "expireRobotEvent" {
        id: EntityId,
    },
    AdminEditPreset(AdminEditPresetEvent) = "adminEditPresetEvent" {
        id: EntityId,
        preset_id: EntityId,
        name: String,
    },
    AdminSavePreset(AdminSavePresetEvent) = "adminSavePresetEvent" {
        id: EntityId,
        name: String,
        preset_id: EntityId,
        player_id: EntityId,
    },
    AdminLoadPreset(AdminLoadPresetEvent) = "adminLoadPresetEvent" {
        id: EntityId,
        preset_id: EntityId,
        player_id: EntityId,
    },

    // -- farming and fishing --------------------------------------------------

    TillSoil(TillSoilEvent) = "tillSoilEvent" {
        id: EntityId,
        positions: Vec<Vec3i>,
        shard_ids: IdList,
        tool_ref: OwnedItemReference,
        occupancy_ids: IdList,
    },
    PlantSeed(PlantSeedEvent) = "plantSeedEvent" {
        id: EntityId,
        position: Vec3i,
        user_id: EntityId,
        seed: OwnedItemReference,
        occupancy_id: Option<EntityId>,
        existing_farming_id: Option<EntityId>,
    },
    WaterPlants(WaterPlantsEvent) = "waterPlantsEvent" {
        id: EntityId,
        plant_ids: IdList,
        tool_ref: OwnedItemReference,
    },
    FertilizePlant(FertilizePlantEvent) = "fertilizePlantEvent" {
        id: EntityId,
        user_id: EntityId,
        tool_ref: OwnedItemReference,
    },
    AdminDestroyPlant(AdminDestroyPlantEvent) = "adminDestroyPlantEvent" {
        id: EntityId,
        plant_id: EntityId,
    },
    FishingClaim(FishingClaimEvent) = "fishingClaimEvent" {
        id: EntityId,
        bag: ItemBag,
        tool_ref: OwnedItemReference,
        catch_time: f64,
    },
    FishingCaught(FishingCaughtEvent) = "fishingCaughtEvent" {
        id: EntityId,
        bag: ItemBag,
    },
    FishingFailed(FishingFailedEvent) = "fishingFailedEvent" {
        id: EntityId,
        tool_ref: OwnedItemReference,
        catch_time: f64,
    },
    FishingConsumeBait(FishingConsumeBaitEvent) = "fishingConsumeBaitEvent" {
        id: EntityId,
        reference = "ref": OwnedItemReference,
        item_id: EntityId,
    },
    TreasureRoll(TreasureRollEvent) = "treasureRollEvent" {
        id: EntityId,
        reference = "ref": OwnedItemReference,
        item: Item,
    },

    // -- minigames ------------------------------------------------------------

    CreateOrJoinSpleef(CreateOrJoinSpleefEvent) = "createOrJoinSpleefEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_instance_id: Option<EntityId>,
        bounds = "box": Box2,
    },
    JoinDeathmatch(JoinDeathmatchEvent) = "joinDeathmatchEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_instance_id: Option<EntityId>,
    },
    FinishSimpleRaceMinigame(FinishSimpleRaceMinigameEvent) = "finishSimpleRaceMinigameEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_element_id: EntityId,
        minigame_instance_id: EntityId,
    },
    StartSimpleRaceMinigame(StartSimpleRaceMinigameEvent) = "startSimpleRaceMinigameEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_element_id: EntityId,
    },
    ReachStartSimpleRaceMinigame(ReachStartSimpleRaceMinigameEvent) =
        "reachStartSimpleRaceMinigameEvent"
    {
        id: EntityId,
        minigame_id: EntityId,
        minigame_element_id: EntityId,
        minigame_instance_id: EntityId,
    },
    ReachCheckpointSimpleRaceMinigame(ReachCheckpointSimpleRaceMinigameEvent) =
        "reachCheckpointSimpleRaceMinigameEvent"
    {
        id: EntityId,
        minigame_id: EntityId,
        minigame_element_id: EntityId,
        minigame_instance_id: EntityId,
    },
    RestartSimpleRaceMinigame(RestartSimpleRaceMinigameEvent) = "restartSimpleRaceMinigameEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_instance_id: EntityId,
    },
    TagMinigameHitPlayer(TagMinigameHitPlayerEvent) = "tagMinigameHitPlayerEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_instance_id: EntityId,
        hit_player_id: EntityId,
    },
    QuitMinigame(QuitMinigameEvent) = "quitMinigameEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_instance_id: EntityId,
    },
    GiveMinigameKit(GiveMinigameKitEvent) = "giveMinigameKitEvent" {
        id: EntityId,
        kit: GiveMinigameKitData,
    },
    TouchMinigameStats(TouchMinigameStatsEvent) = "touchMinigameStatsEvent" {
        id: EntityId,
        minigame_id: EntityId,
    },
    EditMinigameMetadata(EditMinigameMetadataEvent) = "editMinigameMetadataEvent" {
        id: EntityId,
        minigame_id: EntityId,
        label: Option<String>,
        hero_photo_id: Option<EntityId>,
        minigame_settings: Option<Buffer>,
        entry_price: Option<f64>,
    },
    /// Server-originated; carries no acting entity.
    MinigameInstanceTick(MinigameInstanceTickEvent) = "minigameInstanceTickEvent" {
        minigame_id: EntityId,
        minigame_instance_id: EntityId,
        denorm_space_clipboard_info: Option<SpaceClipboardInfo>,
    },
    ExpireMinigameInstance(ExpireMinigameInstanceEvent) = "expireMinigameInstanceEvent" {
        minigame_id: EntityId,
        minigame_instance_id: EntityId,
        denorm_space_clipboard_info: Option<SpaceClipboardInfo>,
    },
    AssociateMinigameElement(AssociateMinigameElementEvent) = "associateMinigameElementEvent" {
        id: EntityId,
        minigame_id: EntityId,
        minigame_element_id: EntityId,
        old_minigame_id: Option<EntityId>,
    },
    /// The wire kind keeps its historical spelling.
    CreateMinigameThroughAssociation(CreateMinigameThroughAssociationEvent) =
        "createMinigameThroughAssocationEvent"
    {
        id: EntityId,
        name: String,
        minigame_type = "minigameType": MinigameType,
        minigame_element_id: EntityId,
        old_minigame_id: Option<EntityId>,
    },
    AckWarp(AckWarpEvent) = "ackWarpEvent" {
        id: EntityId,
    },
    ReplenishWateringCan(ReplenishWateringCanEvent) = "replenishWateringCanEvent" {
        id: EntityId,
        position: Vec3i,
        tool_ref: OwnedItemReference,
        user_id: EntityId,
    },

    // -- wands ----------------------------------------------------------------

    SpaceClipboardWandCut(SpaceClipboardWandCutEvent) = "spaceClipboardWandCutEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        bounds = "box": Box2,
    },
    SpaceClipboardWandCopy(SpaceClipboardWandCopyEvent) = "spaceClipboardWandCopyEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        bounds = "box": Box2,
    },
    SpaceClipboardWandPaste(SpaceClipboardWandPasteEvent) = "spaceClipboardWandPasteEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        space_entity_id: EntityId,
        new_box: Box2,
    },
    SpaceClipboardWandDiscard(SpaceClipboardWandDiscardEvent) = "spaceClipboardWandDiscardEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        space_entity_id: EntityId,
        new_box: Box2,
    },
    NegaWandRestore(NegaWandRestoreEvent) = "negaWandRestoreEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        bounds = "box": Box2,
    },
    PlacerWand(PlacerWandEvent) = "placerWandEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        positions: Vec<Vec3i>,
    },
    ClearPlacer(ClearPlacerEvent) = "clearPlacerEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        positions: Vec<Vec3i>,
    },
    DespawnWand(DespawnWandEvent) = "despawnWandEvent" {
        id: EntityId,
        item_ref: OwnedItemReference,
        entity_id = "entityId": EntityId,
    },

    // -- npc and entity administration ----------------------------------------

    SellToEntity(SellToEntityEvent) = "sellToEntityEvent" {
        id: EntityId,
        purchaser_id: EntityId,
        seller_id: EntityId,
        src: InventoryAssignmentPattern,
    },
    SetNpcPosition(SetNpcPositionEvent) = "setNPCPositionEvent" {
        id: EntityId,
        entity_id: EntityId,
        position: Option<Vec3f>,
        orientation: Option<Vec2f>,
        update_spawn: Option<bool>,
    },
    AdminUpdateInspectionTweaks(AdminUpdateInspectionTweaksEvent) =
        "adminUpdateInspectionTweaksEvent"
    {
        id: EntityId,
        entity_id: EntityId,
        hidden: Option<bool>,
    },
    AdminEcsDeleteComponent(AdminEcsDeleteComponentEvent) = "adminECSDeleteComponentEvent" {
        id: EntityId,
        user_id = "userId": EntityId,
        field: String,
    },
    AdminEcsAddComponent(AdminEcsAddComponentEvent) = "adminECSAddComponentEvent" {
        id: EntityId,
        user_id = "userId": EntityId,
        field: String,
    },
    AdminEcsUpdateComponent(AdminEcsUpdateComponentEvent) = "adminECSUpdateComponentEvent" {
        id: EntityId,
        user_id = "userId": EntityId,
        path: Vec<String>,
        value: String,
    },

    // -- teams ----------------------------------------------------------------

    CreateTeam(CreateTeamEvent) = "createTeamEvent" {
        id: EntityId,
        name: String,
    },
    UpdateTeamMetadata(UpdateTeamMetadataEvent) = "updateTeamMetadataEvent" {
        id: EntityId,
        team_id: EntityId,
        name: Option<String>,
        icon: Option<String>,
        color: Option<i32>,
        hero_photo_id: Option<EntityId>,
    },
    InvitePlayerToTeam(InvitePlayerToTeamEvent) = "invitePlayerToTeamEvent" {
        id: EntityId,
        team_id: EntityId,
        player_id: EntityId,
    },
    RequestToJoinTeam(RequestToJoinTeamEvent) = "requestToJoinTeamEvent" {
        id: EntityId,
        entity_id: EntityId,
        team_id: EntityId,
    },
    RequestedToJoinTeam(RequestedToJoinTeamEvent) = "requestedToJoinTeamEvent" {
        id: EntityId,
        entity_id: EntityId,
        team_id: EntityId,
    },
    CancelRequestToJoinTeam(CancelRequestToJoinTeamEvent) = "cancelRequestToJoinTeamEvent" {
        id: EntityId,
        entity_id: EntityId,
        team_id: EntityId,
    },
    RespondToJoinTeamRequest(RespondToJoinTeamRequestEvent) = "respondToJoinTeamRequestEvent" {
        id: EntityId,
        entity_id: EntityId,
        team_id: EntityId,
        response: String,
    },
    RequestToJoinTeamAccepted(RequestToJoinTeamAcceptedEvent) = "requestToJoinTeamAcceptedEvent" {
        id: EntityId,
        entity_id: EntityId,
        team_id: EntityId,
    },
    JoinTeam(JoinTeamEvent) = "joinTeamEvent" {
        id: EntityId,
        team_id: EntityId,
    },
    CancelTeamInvite(CancelTeamInviteEvent) = "cancelTeamInviteEvent" {
        id: EntityId,
        team_id: EntityId,
        invitee_id: EntityId,
    },
    KickTeamMember(KickTeamMemberEvent) = "kickTeamMemberEvent" {
        id: EntityId,
        team_id: EntityId,
        kicked_player_id: EntityId,
    },
    DeclineTeamInvite(DeclineTeamInviteEvent) = "declineTeamInviteEvent" {
        id: EntityId,
        team_id: EntityId,
    },
    QuitTeam(QuitTeamEvent) = "quitTeamEvent" {
        id: EntityId,
        team_id: EntityId,
    },

    // -- trades and gifts -----------------------------------------------------

    BeginTrade(BeginTradeEvent) = "beginTradeEvent" {
        id: EntityId,
        id2: EntityId,
    },
    AcceptTrade(AcceptTradeEvent) = "acceptTradeEvent" {
        id: EntityId,
        trade_id: EntityId,
        other_trader_id: EntityId,
    },
    ChangeTradeOffer(ChangeTradeOfferEvent) = "changeTradeOfferEvent" {
        id: EntityId,
        offer: InventoryAssignmentPattern,
        trade_id: EntityId,
    },
    ExpireTrade(ExpireTradeEvent) = "expireTradeEvent" {
        id: EntityId,
    },
    GiveGift(GiveGiftEvent) = "giveGiftEvent" {
        id: EntityId,
        target: EntityId,
        target_robot: EntityId,
    },
    GiveMailboxItem(GiveMailboxItemEvent) = "giveMailboxItemEvent" {
        player_id: EntityId,
        src_id: EntityId,
        src: OwnedItemReference,
        count: u64,
        dst_id: Option<EntityId>,
        dst: OwnedItemReference,
        target_player_id: EntityId,
        positions: Vec<Vec3i>,
    },
    UnwrapWrappedItem(UnwrapWrappedItemEvent) = "unwrapWrappedItemEvent" {
        id: EntityId,
        reference = "ref": OwnedItemReference,
        item: Item,
    },
    PokePlant(PokePlantEvent) = "pokePlantEvent" {
        id: EntityId,
    },
    AddToOutfit(AddToOutfitEvent) = "addToOutfitEvent" {
        id: EntityId,
        player_id: EntityId,
        src: OwnedItemReference,
    },
    EquipOutfit(EquipOutfitEvent) = "equipOutfitEvent" {
        id: EntityId,
        player_id: EntityId,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
