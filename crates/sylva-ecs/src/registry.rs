//! Static component registry.
//!
//! The registry correlates each permanent component id with its property name,
//! visibility and decoder. Everything here is generated from one table by
//! [`registry!`], so the [`ComponentKind`] enum, the [`AnyComponent`] sum type,
//! the typed [`Component`] impls and the [`REGISTRY`] lookup table cannot drift
//! apart.
//!
//! The table is append-only: ids are never reassigned. Retiring a component
//! removes it from the table and adds its id to [`DEPRECATED_COMPONENT_IDS`],
//! so old stored data still decodes.

use serde_json::{Map, Value};

use crate::components::*;
use crate::fields::{ComponentFields, FieldSpec};
use crate::visibility::Visibility;
use crate::FieldError;

/// Ids that may appear in stored data but whose component no longer exists.
/// The decoder discards them silently.
pub const DEPRECATED_COMPONENT_IDS: [u32; 14] =
    [36, 42, 44, 62, 69, 73, 81, 85, 89, 90, 94, 96, 114, 116];

/// Ids of components that change many times per second (movement, emotes,
/// NPC state). Transports may route these separately.
pub const HFC_COMPONENT_IDS: [u32; 5] = [54, 55, 32, 43, 67];

/// Path prefix under which each component is addressable as a resource.
pub const RESOURCE_PREFIX: &str = "/ecs/c/";

pub fn is_deprecated(id: u32) -> bool {
    DEPRECATED_COMPONENT_IDS.contains(&id)
}

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// A registered component type.
pub trait Component: ComponentFields + Clone + 'static {
    const KIND: ComponentKind;

    fn into_any(self) -> AnyComponent;

    fn from_any(any: &AnyComponent) -> Option<&Self>;

    fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self>;

    fn try_from_any(any: AnyComponent) -> Result<Self, AnyComponent>;
}

type DecodeFn = fn(&Value) -> Result<AnyComponent, FieldError>;

fn decode_as<C: Component>(data: &Value) -> Result<AnyComponent, FieldError> {
    C::decode(data).map(Component::into_any)
}

/// One row of the registry table.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub kind: ComponentKind,
    pub id: u32,
    pub name: &'static str,
    pub visibility: Visibility,
    pub decode: DecodeFn,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// Look up the entry for a wire id.
pub fn decoder_for(id: u32) -> Option<&'static RegistryEntry> {
    ComponentKind::from_id(id).map(ComponentKind::entry)
}

/// Property name for a wire id.
pub fn property_name(id: u32) -> Option<&'static str> {
    ComponentKind::from_id(id).map(ComponentKind::name)
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

macro_rules! registry {
    ($( $ty:ident = $id:literal, $name:literal, $vis:ident; )*) => {
        /// Every registered component, ordered by registry position.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ComponentKind {
            $( $ty, )*
        }

        impl ComponentKind {
            /// All kinds in registry order.
            pub const ALL: &'static [ComponentKind] = &[ $( ComponentKind::$ty, )* ];

            /// Permanent wire id.
            pub const fn id(self) -> u32 {
                match self {
                    $( ComponentKind::$ty => $id, )*
                }
            }

            /// Property name, used by the legacy keyed form.
            pub const fn name(self) -> &'static str {
                match self {
                    $( ComponentKind::$ty => $name, )*
                }
            }

            pub const fn visibility(self) -> Visibility {
                match self {
                    $( ComponentKind::$ty => Visibility::$vis, )*
                }
            }

            pub fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(ComponentKind::$ty), )*
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(ComponentKind::$ty), )*
                    _ => None,
                }
            }

            pub fn entry(self) -> &'static RegistryEntry {
                &REGISTRY[self as usize]
            }

            /// Declared fields of this component.
            pub fn fields(self) -> &'static [FieldSpec] {
                match self {
                    $( ComponentKind::$ty => <$ty as ComponentFields>::FIELDS, )*
                }
            }
        }

        /// A value of any registered component.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyComponent {
            $( $ty($ty), )*
        }

        impl AnyComponent {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $( AnyComponent::$ty(_) => ComponentKind::$ty, )*
                }
            }

            /// Encode to the sparse field array.
            pub fn encode(&self) -> Value {
                match self {
                    $( AnyComponent::$ty(c) => c.encode(), )*
                }
            }
        }

        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$ty;

                fn into_any(self) -> AnyComponent {
                    AnyComponent::$ty(self)
                }

                fn from_any(any: &AnyComponent) -> Option<&Self> {
                    match any {
                        AnyComponent::$ty(c) => Some(c),
                        _ => None,
                    }
                }

                fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self> {
                    match any {
                        AnyComponent::$ty(c) => Some(c),
                        _ => None,
                    }
                }

                fn try_from_any(any: AnyComponent) -> Result<Self, AnyComponent> {
                    match any {
                        AnyComponent::$ty(c) => Ok(c),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for AnyComponent {
                fn from(c: $ty) -> Self {
                    AnyComponent::$ty(c)
                }
            }
        )*

        /// The registry table, indexed by `ComponentKind as usize`.
        pub static REGISTRY: &[RegistryEntry] = &[
            $( RegistryEntry {
                kind: ComponentKind::$ty,
                id: $id,
                name: $name,
                visibility: Visibility::$vis,
                decode: decode_as::<$ty>,
            }, )*
        ];
    };
}

registry! {
    Iced = 57, "iced", Public;
    RemoteConnection = 31, "remote_connection", Public;
    Position = 54, "position", Public;
    Orientation = 55, "orientation", Public;
    RigidBody = 32, "rigid_body", Public;
    Size = 110, "size", Public;
    BoxBounds = 33, "box", Public;
    ShardSeed = 34, "shard_seed", Public;
    ShardDiff = 35, "shard_diff", Public;
    ShardShapes = 60, "shard_shapes", Public;
    ShardSkyOcclusion = 76, "shard_sky_occlusion", Public;
    ShardIrradiance = 80, "shard_irradiance", Public;
    ShardWater = 82, "shard_water", Public;
    ShardOccupancy = 93, "shard_occupancy", Public;
    ShardDye = 111, "shard_dye", Public;
    ShardMoisture = 112, "shard_moisture", Public;
    ShardGrowth = 113, "shard_growth", Public;
    ShardPlacer = 120, "shard_placer", Public;
    ShardMuck = 124, "shard_muck", Public;
    Label = 37, "label", Public;
    GrabBag = 51, "grab_bag", Public;
    Acquisition = 52, "acquisition", Public;
    LooseItem = 53, "loose_item", Public;
    Inventory = 41, "inventory", Owner;
    ContainerInventory = 79, "container_inventory", Public;
    PricedContainerInventory = 86, "priced_container_inventory", Public;
    SelectedItem = 59, "selected_item", Public;
    Wearing = 49, "wearing", Public;
    Emote = 43, "emote", Public;
    AppearanceComponent = 56, "appearance_component", Public;
    GroupComponent = 45, "group_component", Public;
    Challenges = 46, "challenges", Owner;
    RecipeBook = 48, "recipe_book", Owner;
    Expires = 50, "expires", Server;
    Icing = 58, "icing", Server;
    Warpable = 61, "warpable", Public;
    PlayerStatus = 63, "player_status", Public;
    PlayerBehavior = 64, "player_behavior", Public;
    WorldMetadata = 65, "world_metadata", Public;
    NpcMetadata = 66, "npc_metadata", Public;
    NpcState = 67, "npc_state", Server;
    GroupPreviewReference = 68, "group_preview_reference", Public;
    AclComponent = 70, "acl_component", Public;
    DeedComponent = 71, "deed_component", Public;
    GroupPreviewComponent = 72, "group_preview_component", Public;
    BlueprintComponent = 87, "blueprint_component", Public;
    CraftingStationComponent = 74, "crafting_station_component", Public;
    Health = 75, "health", Public;
    BuffsComponent = 101, "buffs_component", Public;
    Gremlin = 77, "gremlin", Public;
    PlaceableComponent = 78, "placeable_component", Public;
    GroupedEntities = 83, "grouped_entities", Public;
    InGroup = 95, "in_group", Public;
    PictureFrameContents = 84, "picture_frame_contents", Public;
    TriggerState = 88, "trigger_state", Owner;
    LifetimeStats = 91, "lifetime_stats", Owner;
    OccupancyComponent = 97, "occupancy_component", Server;
    VideoComponent = 92, "video_component", Public;
    PlayerSession = 98, "player_session", Owner;
    PresetApplied = 99, "preset_applied", Owner;
    PresetPrototype = 100, "preset_prototype", Owner;
    FarmingPlantComponent = 102, "farming_plant_component", Public;
    ShardFarming = 103, "shard_farming", Public;
    CreatedBy = 104, "created_by", Public;
    MinigameComponent = 105, "minigame_component", Public;
    MinigameInstance = 106, "minigame_instance", Public;
    PlayingMinigame = 107, "playing_minigame", Public;
    MinigameElement = 108, "minigame_element", Public;
    ActiveTray = 109, "active_tray", Public;
    Stashed = 115, "stashed", Server;
    MinigameInstanceTickInfo = 117, "minigame_instance_tick_info", Server;
    WarpingTo = 118, "warping_to", Owner;
    MinigameInstanceExpire = 119, "minigame_instance_expire", Public;
    PlacerComponent = 121, "placer_component", Server;
    QuestGiver = 122, "quest_giver", Public;
    DefaultDialog = 123, "default_dialog", Public;
    Unmuck = 125, "unmuck", Public;
    RobotComponent = 126, "robot_component", Public;
    AdminEntity = 140, "admin_entity", Public;
    Protection = 127, "protection", Public;
    ProjectsProtection = 128, "projects_protection", Public;
    DeletesWith = 129, "deletes_with", Server;
    ItemBuyer = 130, "item_buyer", Public;
    InspectionTweaks = 131, "inspection_tweaks", Public;
    ProfilePic = 132, "profile_pic", Public;
    EntityDescription = 133, "entity_description", Public;
    Landmark = 134, "landmark", Public;
    Collideable = 135, "collideable", Public;
    Restoration = 136, "restoration", Public;
    TerrainRestorationDiff = 137, "terrain_restoration_diff", Public;
    Team = 138, "team", Public;
    PlayerCurrentTeam = 139, "player_current_team", Public;
    UserRoles = 141, "user_roles", Owner;
    RestoresTo = 142, "restores_to", Public;
    Trade = 143, "trade", Public;
    ActiveTrades = 144, "active_trades", Public;
    PlacedBy = 145, "placed_by", Public;
    TextSign = 146, "text_sign", Public;
    Irradiance = 147, "irradiance", Public;
    LockedInPlace = 148, "locked_in_place", Public;
    DeathInfo = 149, "death_info", Owner;
    SyntheticStats = 150, "synthetic_stats", Public;
    Idle = 151, "idle", Public;
    Voice = 152, "voice", Public;
    GiftGiver = 153, "gift_giver", Owner;
}

impl ComponentKind {
    /// Whether this component is on the high-frequency list.
    pub fn is_high_frequency(self) -> bool {
        HFC_COMPONENT_IDS.contains(&self.id())
    }

    /// Resource path, e.g. `/ecs/c/position`.
    pub fn resource_path(self) -> String {
        format!("{RESOURCE_PREFIX}{}", self.name())
    }

    pub fn from_resource_path(path: &str) -> Option<Self> {
        path.strip_prefix(RESOURCE_PREFIX)
            .and_then(ComponentKind::from_name)
    }
}

impl AnyComponent {
    /// Keyed form `{ fieldName: value }` with absent fields omitted. The legacy
    /// decoder accepts it back.
    pub fn to_named(&self) -> Value {
        let mut out = Map::new();
        if let Value::Array(items) = self.encode() {
            for spec in self.kind().fields() {
                let value = usize::from(spec.tag)
                    .checked_sub(1)
                    .and_then(|index| items.get(index))
                    .filter(|v| !v.is_null());
                if let Some(value) = value {
                    out.insert(spec.name.to_owned(), value.clone());
                }
            }
        }
        Value::Object(out)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.id())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_names_are_unique() {
        let ids: HashSet<_> = REGISTRY.iter().map(|e| e.id).collect();
        let names: HashSet<_> = REGISTRY.iter().map(|e| e.name).collect();
        assert_eq!(ids.len(), REGISTRY.len());
        assert_eq!(names.len(), REGISTRY.len());
    }

    #[test]
    fn no_registered_id_is_deprecated() {
        for entry in REGISTRY {
            assert!(!is_deprecated(entry.id), "{} is deprecated", entry.name);
        }
    }

    #[test]
    fn table_is_indexed_by_kind() {
        assert_eq!(REGISTRY.len(), ComponentKind::ALL.len());
        for (index, kind) in ComponentKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
            let entry = kind.entry();
            assert_eq!(entry.kind, *kind);
            assert_eq!(entry.id, kind.id());
            assert_eq!(entry.name, kind.name());
            assert_eq!(ComponentKind::from_id(entry.id), Some(*kind));
            assert_eq!(ComponentKind::from_name(entry.name), Some(*kind));
        }
    }

    #[test]
    fn lookups_by_wire_id() {
        assert_eq!(property_name(75), Some("health"));
        assert_eq!(decoder_for(54).map(|e| e.kind), Some(ComponentKind::Position));
        assert!(decoder_for(36).is_none());
        assert!(decoder_for(9999).is_none());
    }

    #[test]
    fn registry_decoder_produces_matching_variant() {
        let entry = ComponentKind::Label.entry();
        let any = (entry.decode)(&serde_json::json!(["hi"])).unwrap();
        assert_eq!(any, AnyComponent::Label(Label { text: "hi".into() }));
    }

    #[test]
    fn high_frequency_and_resource_paths() {
        assert!(ComponentKind::Position.is_high_frequency());
        assert!(ComponentKind::NpcState.is_high_frequency());
        assert!(!ComponentKind::Label.is_high_frequency());
        assert_eq!(ComponentKind::RigidBody.resource_path(), "/ecs/c/rigid_body");
        assert_eq!(
            ComponentKind::from_resource_path("/ecs/c/rigid_body"),
            Some(ComponentKind::RigidBody)
        );
        assert_eq!(ComponentKind::from_resource_path("/ecs/rigid_body"), None);
    }

    #[test]
    fn named_form_uses_wire_names_and_decodes_back() {
        let health = Health {
            hp: 4,
            max_hp: 9,
            ..Default::default()
        };
        let named = AnyComponent::from(health.clone()).to_named();
        assert_eq!(named, serde_json::json!({"hp": 4, "maxHp": 9}));
        assert_eq!(Health::decode(&named).unwrap(), health);
        assert_eq!(ComponentKind::Health.fields().len(), 6);
    }
}
