#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Fell Desert mission console.
//!
//! This crate defines the vocabulary that connects the console adapter, the
//! mission engine and the pure text systems. The engine is reached only
//! through the [`MissionEngine`] capability trait: systems ask it for
//! immutable snapshots ([`MapOverview`], [`SquaddieInfo`],
//! [`SquaddieActionValidity`], [`MissionObjective`]) and turn them into
//! display text. Nothing here caches engine state between calls.

use std::fmt;

use serde::Deserialize;

/// Canonical banner emitted when the console boots.
pub const WELCOME_BANNER: &str = "Battle of Fell Desert CLI";

/// Zero-based row and column address into the hex-offset map grid.
///
/// Odd rows are shifted half a tile to the right of even rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u32,
    col: u32,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn col(&self) -> u32 {
        self.col
    }

    /// Number of hex steps separating two offset coordinates.
    #[must_use]
    pub fn hex_distance(self, other: Coordinate) -> u32 {
        let (x1, y1, z1) = self.to_cube();
        let (x2, y2, z2) = other.to_cube();
        let steps = ((x1 - x2).abs() + (y1 - y2).abs() + (z1 - z2).abs()) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    fn to_cube(self) -> (i64, i64, i64) {
        let row = i64::from(self.row);
        let col = i64::from(self.col);
        let x = col - (row - (row & 1)) / 2;
        let z = row;
        (x, -x - z, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Size of the mission map measured in whole tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapDimensions {
    width: u32,
    height: u32,
}

impl MapDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the coordinate addresses a tile on the map.
    #[must_use]
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height && coordinate.col < self.width
    }
}

/// Composite identifier of a squaddie taking part in the mission.
///
/// The out-of-battle half is the stable, human-meaningful key; the in-battle
/// half is the engine's transient handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquaddieRef {
    in_battle_squaddie_id: u32,
    out_of_battle_squaddie_id: String,
}

impl SquaddieRef {
    /// Creates a new squaddie reference.
    #[must_use]
    pub fn new(in_battle_squaddie_id: u32, out_of_battle_squaddie_id: impl Into<String>) -> Self {
        Self {
            in_battle_squaddie_id,
            out_of_battle_squaddie_id: out_of_battle_squaddie_id.into(),
        }
    }

    /// Engine-assigned handle for the squaddie within this mission.
    #[must_use]
    pub const fn in_battle_squaddie_id(&self) -> u32 {
        self.in_battle_squaddie_id
    }

    /// Stable key identifying the squaddie template.
    #[must_use]
    pub fn out_of_battle_squaddie_id(&self) -> &str {
        &self.out_of_battle_squaddie_id
    }
}

/// Allegiance category of a squaddie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Affiliation {
    /// Squaddies controlled by the player.
    Player,
    /// Squaddies fighting alongside the player.
    Ally,
    /// Squaddies opposing the player.
    Enemy,
    /// Neutral squaddies.
    None,
}

impl Affiliation {
    /// Every affiliation in turn order.
    pub const ALL: [Affiliation; 4] = [
        Affiliation::Player,
        Affiliation::Ally,
        Affiliation::Enemy,
        Affiliation::None,
    ];

    /// Capitalised name used in map headers and listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Ally => "Ally",
            Self::Enemy => "Enemy",
            Self::None => "None",
        }
    }

    /// Upper-case tag used in squaddie status readouts.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Player => "PLAYER",
            Self::Ally => "ALLY",
            Self::Enemy => "ENEMY",
            Self::None => "NONE",
        }
    }

    /// Plural word naming the group in objective descriptions.
    #[must_use]
    pub const fn objective_word(self) -> &'static str {
        match self {
            Self::Player => "players",
            Self::Ally => "allies",
            Self::Enemy => "enemy",
            Self::None => "neutrals",
        }
    }

    /// Reports whether squaddies of the two affiliations fight each other.
    ///
    /// Players and allies oppose enemies; neutral squaddies oppose nobody.
    #[must_use]
    pub const fn is_hostile_to(self, other: Affiliation) -> bool {
        matches!(
            (self, other),
            (Self::Player | Self::Ally, Self::Enemy) | (Self::Enemy, Self::Player | Self::Ally)
        )
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Step of the mission's turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissionPhase {
    /// Bookkeeping that opens a new turn.
    TurnStart,
    /// Preparation before the affiliation acts.
    AffiliationTurnStart(Affiliation),
    /// The affiliation's squaddies act.
    AffiliationTurn(Affiliation),
    /// Cleanup after the affiliation acted.
    AffiliationTurnEnd(Affiliation),
    /// Bookkeeping that closes the turn.
    TurnEnd,
}

impl MissionPhase {
    /// Affiliation the phase belongs to, if any.
    #[must_use]
    pub const fn affiliation(self) -> Option<Affiliation> {
        match self {
            Self::AffiliationTurnStart(affiliation)
            | Self::AffiliationTurn(affiliation)
            | Self::AffiliationTurnEnd(affiliation) => Some(affiliation),
            Self::TurnStart | Self::TurnEnd => None,
        }
    }
}

impl fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnStart => f.write_str("Turn Start"),
            Self::AffiliationTurnStart(affiliation) => write!(f, "{affiliation} Turn Start"),
            Self::AffiliationTurn(affiliation) => write!(f, "{affiliation} Turn"),
            Self::AffiliationTurnEnd(affiliation) => write!(f, "{affiliation} Turn End"),
            Self::TurnEnd => f.write_str("Turn End"),
        }
    }
}

/// Display category derived from a tile's movement properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Single-cost ground squaddies may stop on.
    Standard,
    /// Costly ground squaddies may stop on.
    Difficult,
    /// Ground that can be crossed but never stopped on.
    Pit,
    /// Impassable ground.
    Wall,
}

impl TerrainKind {
    /// Legend order used by map renderings.
    pub const LEGEND: [TerrainKind; 4] = [
        TerrainKind::Standard,
        TerrainKind::Difficult,
        TerrainKind::Pit,
        TerrainKind::Wall,
    ];

    /// Classifies terrain from its movement cost and stopping rule.
    ///
    /// A missing movement cost always yields [`TerrainKind::Wall`], whatever
    /// the stopping rule says. Only an exact cost of one is standard ground.
    #[must_use]
    pub const fn classify(movement_cost: Option<u32>, can_stop: bool) -> Self {
        match (movement_cost, can_stop) {
            (None, _) => Self::Wall,
            (Some(_), false) => Self::Pit,
            (Some(1), true) => Self::Standard,
            (Some(_), true) => Self::Difficult,
        }
    }

    /// Single character drawn on the map grid.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Standard => '.',
            Self::Difficult => '~',
            Self::Pit => '_',
            Self::Wall => '#',
        }
    }

    /// Name reported when inspecting a coordinate.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Difficult => "Difficult",
            Self::Pit => "Pit",
            Self::Wall => "Wall",
        }
    }

    /// Legend description paired with the symbol.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Standard => "Normal terrain",
            Self::Difficult => "Rough terrain",
            Self::Pit => "Pit (cannot stop)",
            Self::Wall => "Wall (impassable)",
        }
    }
}

/// Movement properties of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Terrain {
    /// Cost of entering the tile; `None` means the tile cannot be entered.
    pub movement_cost: Option<u32>,
    /// Whether a squaddie may end its movement on the tile.
    pub can_stop: bool,
}

impl Terrain {
    /// Ground that costs one point and allows stopping.
    pub const STANDARD: Terrain = Terrain::new(Some(1), true);
    /// Ground that costs two points and allows stopping.
    pub const DIFFICULT: Terrain = Terrain::new(Some(2), true);
    /// Ground that can be crossed for one point but never stopped on.
    pub const PIT: Terrain = Terrain::new(Some(1), false);
    /// Impassable ground.
    pub const WALL: Terrain = Terrain::new(None, false);

    /// Creates a terrain descriptor.
    #[must_use]
    pub const fn new(movement_cost: Option<u32>, can_stop: bool) -> Self {
        Self {
            movement_cost,
            can_stop,
        }
    }

    /// Display category of the terrain.
    #[must_use]
    pub const fn kind(&self) -> TerrainKind {
        TerrainKind::classify(self.movement_cost, self.can_stop)
    }
}

/// Immutable description of one map tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapTile {
    /// Address of the tile.
    pub coordinate: Coordinate,
    /// Movement properties of the tile.
    pub terrain: Terrain,
    /// Squaddie standing on the tile, if any.
    pub squaddie: Option<SquaddieRef>,
}

impl MapTile {
    /// Creates a tile snapshot.
    #[must_use]
    pub const fn new(coordinate: Coordinate, terrain: Terrain, squaddie: Option<SquaddieRef>) -> Self {
        Self {
            coordinate,
            terrain,
            squaddie,
        }
    }
}

/// Read-only snapshot of the whole mission map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOverview {
    dimensions: MapDimensions,
    rows: Vec<Vec<MapTile>>,
}

impl MapOverview {
    /// Creates an overview from row-major tiles.
    #[must_use]
    pub fn new(width: u32, height: u32, rows: Vec<Vec<MapTile>>) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            rows,
        }
    }

    /// Size of the map.
    #[must_use]
    pub const fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.dimensions.width()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.dimensions.height()
    }

    /// Iterator over the rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[MapTile]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterator over every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &MapTile> {
        self.rows.iter().flatten()
    }

    /// Squaddies on the map with their coordinates, in row-major order.
    pub fn squaddies(&self) -> impl Iterator<Item = (&SquaddieRef, Coordinate)> {
        self.tiles()
            .filter_map(|tile| tile.squaddie.as_ref().map(|id| (id, tile.coordinate)))
    }
}

/// Kinds of status effects a squaddie may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum SquaddieConditionType {
    /// Condition the engine could not identify.
    Unknown,
    /// Absorbs incoming damage.
    Absorb,
    /// Raises armor.
    Armor,
    /// Harder to hit.
    Elusive,
    /// Fewer action points.
    Slowed,
    /// More action points.
    Hustle,
}

impl SquaddieConditionType {
    /// Name shown in squaddie readouts.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Absorb => "Absorb",
            Self::Armor => "Armor",
            Self::Elusive => "Elusive",
            Self::Slowed => "Slowed",
            Self::Hustle => "Hustle",
        }
    }
}

/// Status effect currently applied to a squaddie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquaddieCondition {
    /// Kind of effect.
    pub kind: SquaddieConditionType,
    /// Strength of a numerical effect; binary effects carry none.
    pub amount: Option<i32>,
    /// Turns left before the effect expires; permanent effects carry none.
    pub duration: Option<u32>,
}

impl SquaddieCondition {
    /// Creates a condition snapshot.
    #[must_use]
    pub const fn new(kind: SquaddieConditionType, amount: Option<i32>, duration: Option<u32>) -> Self {
        Self {
            kind,
            amount,
            duration,
        }
    }

    /// Reports whether the condition carries an amount.
    #[must_use]
    pub const fn is_numerical(&self) -> bool {
        self.amount.is_some()
    }
}

/// Status snapshot of a single squaddie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquaddieInfo {
    /// Display name.
    pub name: String,
    /// Allegiance of the squaddie.
    pub affiliation: Affiliation,
    /// Remaining hit points.
    pub current_hit_points: u32,
    /// Hit point ceiling.
    pub max_hit_points: u32,
    /// Action points left this turn.
    pub current_action_points: u32,
    /// Action points granted at the start of the squaddie's turn.
    pub maximum_action_points: u32,
    /// Active status effects.
    pub conditions: Vec<SquaddieCondition>,
}

/// Action points an action spends when it succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionPointCost {
    /// Spends a fixed number of points.
    Points(u32),
    /// Spends every remaining point.
    All,
}

/// Definition of an action a squaddie can perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDefinition {
    /// Stable action identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Points spent on success; `None` when the action is free.
    pub action_point_cost: Option<ActionPointCost>,
    /// Maximum hex distance to a target; `None` for untargeted actions.
    pub range: Option<u32>,
}

/// Action the squaddie may perform right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidAction {
    /// Identifier of the action definition.
    pub action_id: String,
    /// Display name of the action.
    pub action_name: String,
    /// Coordinates the action may target.
    pub target_coordinates: Vec<Coordinate>,
    /// Squaddies the action may target.
    pub target_squaddies: Vec<SquaddieRef>,
}

/// Action the squaddie knows but cannot perform right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidAction {
    /// Identifier of the action definition.
    pub action_id: String,
    /// Display name of the action.
    pub action_name: String,
    /// Human-readable rejection reason.
    pub reason: String,
}

/// Engine verdict on every action a squaddie knows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaddieActionValidity {
    /// Actions that may be performed.
    pub valid_actions: Vec<ValidAction>,
    /// Actions that are currently rejected.
    pub invalid_actions: Vec<InvalidAction>,
}

/// Criterion tracked by a mission objective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissionObjectiveCriteria {
    /// Satisfied once the described squaddies are defeated.
    SquaddiesDefeated(SquaddiesDefeatedCriteria),
}

/// Squaddies that must be defeated to satisfy a criterion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaddiesDefeatedCriteria {
    /// Affiliations whose squaddies count, in declaration order.
    pub affiliations: Vec<Affiliation>,
    /// Explicit squaddie keys that count.
    pub squaddie_ids: Vec<String>,
}

/// Outcome granted when an objective completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum MissionReward {
    /// The mission is won.
    Victory,
    /// The mission is lost.
    MissionFailure,
}

/// Mission-level success or loss condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionObjective {
    /// Stable objective identifier.
    pub id: String,
    /// Criteria that complete the objective.
    pub criteria: Vec<MissionObjectiveCriteria>,
    /// Rewards granted on completion.
    pub rewards: Vec<MissionReward>,
}

impl MissionObjective {
    /// Reports whether completing the objective loses the mission.
    #[must_use]
    pub fn has_failure_reward(&self) -> bool {
        self.rewards.contains(&MissionReward::MissionFailure)
    }
}

/// Capability surface of the mission engine.
///
/// Every query is side-effect free and reflects the engine state at the time
/// of the call; only [`MissionEngine::transition_to_next_phase`] mutates.
pub trait MissionEngine {
    /// Captures the whole map with terrain and occupants.
    fn map_overview(&self) -> MapOverview;

    /// Size of the map.
    fn map_dimensions(&self) -> MapDimensions;

    /// Terrain at the coordinate; coordinates off the map read as walls.
    fn terrain_at(&self, coordinate: Coordinate) -> Terrain;

    /// Squaddie standing at the coordinate, if any.
    fn squaddie_at(&self, coordinate: Coordinate) -> Option<SquaddieRef>;

    /// Position of the squaddie, or `None` while it is off the map.
    fn squaddie_position(&self, squaddie: &SquaddieRef) -> Option<Coordinate>;

    /// Status of the squaddie, or `None` when the engine does not know it.
    fn squaddie_info(&self, squaddie: &SquaddieRef) -> Option<SquaddieInfo>;

    /// Valid and invalid actions of the squaddie.
    fn squaddie_action_validity(&self, squaddie: &SquaddieRef) -> SquaddieActionValidity;

    /// Looks up an action definition.
    fn action_by_id(&self, action_id: &str) -> Option<ActionDefinition>;

    /// Squaddies allowed to act during the current phase.
    fn squaddies_who_can_act_this_phase(&self) -> Vec<SquaddieRef>;

    /// Zero-based turn counter.
    fn current_turn_number(&self) -> u32;

    /// Current step of the turn cycle.
    fn current_phase(&self) -> MissionPhase;

    /// Advances the turn cycle by exactly one step.
    fn transition_to_next_phase(&mut self);

    /// Objectives not yet completed.
    fn in_progress_objectives(&self) -> Vec<MissionObjective>;

    /// Objectives completed whose rewards are still pending.
    fn completed_unrewarded_objectives(&self) -> Vec<MissionObjective>;

    /// Objectives completed and rewarded.
    fn completed_rewarded_objectives(&self) -> Vec<MissionObjective>;
}
