#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Reference in-memory mission engine for the Fell Desert console.
//!
//! The world owns the authoritative mission state and exposes it through the
//! [`MissionEngine`] capability trait. It tracks terrain, squaddie placement,
//! action points, the turn cycle and objective bookkeeping. It never resolves
//! combat or moves squaddies; those belong to the full mission engine.

mod scenario;

use fell_desert_core::{
    ActionDefinition, ActionPointCost, Affiliation, Coordinate, InvalidAction, MapDimensions,
    MapOverview, MapTile, MissionEngine, MissionObjective, MissionObjectiveCriteria,
    MissionPhase, MissionReward, SquaddieActionValidity, SquaddieCondition,
    SquaddieConditionType, SquaddieInfo, SquaddieRef, SquaddiesDefeatedCriteria, Terrain,
    ValidAction,
};
use tracing::debug;

pub use scenario::{ObjectiveStatus, ScenarioError, SUPPORTED_SCENARIO_VERSION};

/// Identifier of the movement action every squaddie knows.
pub const DEFAULT_MOVE_ACTION_ID: &str = "default-move";
/// Identifier of the end-turn action every squaddie knows.
pub const DEFAULT_END_TURN_ACTION_ID: &str = "default-end-turn";

const NO_TARGETS_IN_RANGE: &str = "No applicable targets in range";
const NOT_ENOUGH_ACTION_POINTS: &str = "Not enough action points";

/// Represents the authoritative mission state.
#[derive(Clone, Debug)]
pub struct World {
    name: String,
    dimensions: MapDimensions,
    terrain: Vec<Terrain>,
    actions: Vec<ActionDefinition>,
    squaddies: Vec<Squaddie>,
    objectives: Vec<TrackedObjective>,
    turn_number: u32,
    phase: MissionPhase,
}

impl World {
    /// Creates the Battle of Fell Desert mission at turn zero.
    #[must_use]
    pub fn new() -> Self {
        let (s, d, p, w) = (
            Terrain::STANDARD,
            Terrain::DIFFICULT,
            Terrain::PIT,
            Terrain::WALL,
        );
        let rows = [
            [s, s, d, s, s],
            [s, p, s, w, s],
            [s, s, s, s, d],
            [d, s, p, s, s],
        ];
        let terrain = rows.iter().flatten().copied().collect();

        let actions = vec![
            ActionDefinition {
                id: "scimitar".to_owned(),
                name: "Scimitar".to_owned(),
                action_point_cost: Some(ActionPointCost::Points(1)),
                range: Some(1),
            },
            ActionDefinition {
                id: "bite".to_owned(),
                name: "Bite".to_owned(),
                action_point_cost: Some(ActionPointCost::Points(1)),
                range: Some(1),
            },
        ];

        let squaddies = vec![
            SquaddieSeed {
                key: "lini".to_owned(),
                name: "Lini".to_owned(),
                affiliation: Affiliation::Player,
                position: Some(Coordinate::new(0, 0)),
                max_hit_points: 3,
                max_action_points: 3,
                conditions: Vec::new(),
                action_ids: vec!["scimitar".to_owned()],
            },
            SquaddieSeed {
                key: "slither-demon".to_owned(),
                name: "Slither Demon".to_owned(),
                affiliation: Affiliation::Enemy,
                position: Some(Coordinate::new(3, 4)),
                max_hit_points: 2,
                max_action_points: 3,
                conditions: vec![SquaddieCondition::new(
                    SquaddieConditionType::Elusive,
                    None,
                    None,
                )],
                action_ids: vec!["bite".to_owned()],
            },
        ];

        let objectives = vec![
            TrackedObjective::defeat_affiliation("defeat-enemies", Affiliation::Enemy, MissionReward::Victory),
            TrackedObjective::defeat_affiliation(
                "protect-players",
                Affiliation::Player,
                MissionReward::MissionFailure,
            ),
        ];

        Self::assemble(
            "Battle of Fell Desert".to_owned(),
            MapDimensions::new(5, 4),
            terrain,
            actions,
            squaddies,
            objectives,
        )
    }

    /// Builds a world from a TOML mission scenario.
    pub fn from_scenario_toml(contents: &str) -> Result<Self, ScenarioError> {
        scenario::load(contents)
    }

    /// Spends every remaining action point of the squaddie.
    ///
    /// Returns `false` when the squaddie is unknown.
    pub fn end_squaddie_turn(&mut self, squaddie: &SquaddieRef) -> bool {
        match self.squaddie_mut(squaddie) {
            Some(entry) => {
                entry.action_points = 0;
                true
            }
            None => false,
        }
    }

    /// Changes the bookkeeping status of an objective.
    ///
    /// Returns `false` when no objective carries the identifier.
    pub fn set_objective_status(&mut self, objective_id: &str, status: ObjectiveStatus) -> bool {
        match self
            .objectives
            .iter_mut()
            .find(|tracked| tracked.objective.id == objective_id)
        {
            Some(tracked) => {
                tracked.status = status;
                true
            }
            None => false,
        }
    }

    pub(crate) fn assemble(
        name: String,
        dimensions: MapDimensions,
        terrain: Vec<Terrain>,
        mut actions: Vec<ActionDefinition>,
        seeds: Vec<SquaddieSeed>,
        objectives: Vec<TrackedObjective>,
    ) -> Self {
        actions.push(ActionDefinition {
            id: DEFAULT_MOVE_ACTION_ID.to_owned(),
            name: "Move".to_owned(),
            action_point_cost: None,
            range: None,
        });
        actions.push(ActionDefinition {
            id: DEFAULT_END_TURN_ACTION_ID.to_owned(),
            name: "End Turn".to_owned(),
            action_point_cost: Some(ActionPointCost::All),
            range: None,
        });

        let squaddies = seeds
            .into_iter()
            .zip(0_u32..)
            .map(|(seed, in_battle_id)| Squaddie::from_seed(in_battle_id, seed))
            .collect();

        Self {
            name,
            dimensions,
            terrain,
            actions,
            squaddies,
            objectives,
            turn_number: 0,
            phase: MissionPhase::TurnStart,
        }
    }

    fn terrain_index(&self, coordinate: Coordinate) -> Option<usize> {
        if !self.dimensions.contains(coordinate) {
            return None;
        }
        let row = usize::try_from(coordinate.row()).ok()?;
        let col = usize::try_from(coordinate.col()).ok()?;
        let width = usize::try_from(self.dimensions.width()).ok()?;
        Some(row * width + col)
    }

    fn squaddie(&self, reference: &SquaddieRef) -> Option<&Squaddie> {
        self.squaddies
            .iter()
            .find(|squaddie| squaddie.reference == *reference)
    }

    fn squaddie_mut(&mut self, reference: &SquaddieRef) -> Option<&mut Squaddie> {
        self.squaddies
            .iter_mut()
            .find(|squaddie| squaddie.reference == *reference)
    }

    fn occupant(&self, coordinate: Coordinate) -> Option<&Squaddie> {
        self.squaddies
            .iter()
            .find(|squaddie| squaddie.position == Some(coordinate))
    }

    fn action(&self, action_id: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|action| action.id == action_id)
    }

    fn affiliation_can_act(&self, affiliation: Affiliation) -> bool {
        self.squaddies
            .iter()
            .any(|squaddie| squaddie.affiliation == affiliation && squaddie.can_act())
    }

    fn next_affiliation_after(&self, current: Option<Affiliation>) -> Option<Affiliation> {
        let start = current
            .and_then(|affiliation| Affiliation::ALL.iter().position(|a| *a == affiliation))
            .map_or(0, |index| index + 1);
        Affiliation::ALL.iter().skip(start).copied().find(|affiliation| {
            self.squaddies
                .iter()
                .any(|squaddie| squaddie.affiliation == *affiliation && squaddie.position.is_some())
        })
    }

    fn begin_affiliation_turn(&mut self, affiliation: Affiliation) {
        for squaddie in self
            .squaddies
            .iter_mut()
            .filter(|squaddie| squaddie.affiliation == affiliation)
        {
            squaddie.action_points = squaddie.max_action_points;
        }
    }

    fn evaluate_action(&self, actor: &Squaddie, action: &ActionDefinition) -> Result<ValidAction, InvalidAction> {
        let reject = |reason: &str| InvalidAction {
            action_id: action.id.clone(),
            action_name: action.name.clone(),
            reason: reason.to_owned(),
        };

        if let Some(ActionPointCost::Points(cost)) = action.action_point_cost {
            if cost > actor.action_points {
                return Err(reject(NOT_ENOUGH_ACTION_POINTS));
            }
        }

        let mut valid = ValidAction {
            action_id: action.id.clone(),
            action_name: action.name.clone(),
            target_coordinates: Vec::new(),
            target_squaddies: Vec::new(),
        };

        let Some(range) = action.range else {
            return Ok(valid);
        };
        let Some(origin) = actor.position else {
            return Err(reject(NO_TARGETS_IN_RANGE));
        };

        for target in &self.squaddies {
            let Some(position) = target.position else {
                continue;
            };
            if !actor.affiliation.is_hostile_to(target.affiliation) {
                continue;
            }
            let distance = origin.hex_distance(position);
            if distance > 0 && distance <= range {
                valid.target_coordinates.push(position);
                valid.target_squaddies.push(target.reference.clone());
            }
        }

        if valid.target_squaddies.is_empty() {
            Err(reject(NO_TARGETS_IN_RANGE))
        } else {
            Ok(valid)
        }
    }

    fn objectives_with_status(&self, status: ObjectiveStatus) -> Vec<MissionObjective> {
        self.objectives
            .iter()
            .filter(|tracked| tracked.status == status)
            .map(|tracked| tracked.objective.clone())
            .collect()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionEngine for World {
    fn map_overview(&self) -> MapOverview {
        let rows = (0..self.dimensions.height())
            .map(|row| {
                (0..self.dimensions.width())
                    .map(|col| {
                        let coordinate = Coordinate::new(row, col);
                        MapTile::new(
                            coordinate,
                            self.terrain_at(coordinate),
                            self.squaddie_at(coordinate),
                        )
                    })
                    .collect()
            })
            .collect();
        MapOverview::new(self.dimensions.width(), self.dimensions.height(), rows)
    }

    fn map_dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn terrain_at(&self, coordinate: Coordinate) -> Terrain {
        self.terrain_index(coordinate)
            .and_then(|index| self.terrain.get(index).copied())
            .unwrap_or(Terrain::WALL)
    }

    fn squaddie_at(&self, coordinate: Coordinate) -> Option<SquaddieRef> {
        self.occupant(coordinate)
            .map(|squaddie| squaddie.reference.clone())
    }

    fn squaddie_position(&self, squaddie: &SquaddieRef) -> Option<Coordinate> {
        self.squaddie(squaddie).and_then(|entry| entry.position)
    }

    fn squaddie_info(&self, squaddie: &SquaddieRef) -> Option<SquaddieInfo> {
        self.squaddie(squaddie).map(Squaddie::info)
    }

    fn squaddie_action_validity(&self, squaddie: &SquaddieRef) -> SquaddieActionValidity {
        let mut validity = SquaddieActionValidity::default();
        let Some(actor) = self.squaddie(squaddie) else {
            return validity;
        };

        for action in actor.action_ids.iter().filter_map(|id| self.action(id)) {
            match self.evaluate_action(actor, action) {
                Ok(valid) => validity.valid_actions.push(valid),
                Err(invalid) => validity.invalid_actions.push(invalid),
            }
        }
        validity
    }

    fn action_by_id(&self, action_id: &str) -> Option<ActionDefinition> {
        self.action(action_id).cloned()
    }

    fn squaddies_who_can_act_this_phase(&self) -> Vec<SquaddieRef> {
        let MissionPhase::AffiliationTurn(affiliation) = self.phase else {
            return Vec::new();
        };
        self.squaddies
            .iter()
            .filter(|squaddie| squaddie.affiliation == affiliation && squaddie.can_act())
            .map(|squaddie| squaddie.reference.clone())
            .collect()
    }

    fn current_turn_number(&self) -> u32 {
        self.turn_number
    }

    fn current_phase(&self) -> MissionPhase {
        self.phase
    }

    fn transition_to_next_phase(&mut self) {
        let next = match self.phase {
            MissionPhase::TurnStart => self
                .next_affiliation_after(None)
                .map_or(MissionPhase::TurnEnd, MissionPhase::AffiliationTurnStart),
            MissionPhase::AffiliationTurnStart(affiliation) => {
                MissionPhase::AffiliationTurn(affiliation)
            }
            MissionPhase::AffiliationTurn(affiliation) => {
                if self.affiliation_can_act(affiliation) {
                    MissionPhase::AffiliationTurn(affiliation)
                } else {
                    MissionPhase::AffiliationTurnEnd(affiliation)
                }
            }
            MissionPhase::AffiliationTurnEnd(affiliation) => self
                .next_affiliation_after(Some(affiliation))
                .map_or(MissionPhase::TurnEnd, MissionPhase::AffiliationTurnStart),
            MissionPhase::TurnEnd => {
                self.turn_number = self.turn_number.saturating_add(1);
                MissionPhase::TurnStart
            }
        };

        if let MissionPhase::AffiliationTurnStart(affiliation) = next {
            self.begin_affiliation_turn(affiliation);
        }

        debug!(
            mission = %self.name,
            turn = self.turn_number,
            from = %self.phase,
            to = %next,
            "phase transition"
        );
        self.phase = next;
    }

    fn in_progress_objectives(&self) -> Vec<MissionObjective> {
        self.objectives_with_status(ObjectiveStatus::InProgress)
    }

    fn completed_unrewarded_objectives(&self) -> Vec<MissionObjective> {
        self.objectives_with_status(ObjectiveStatus::Completed)
    }

    fn completed_rewarded_objectives(&self) -> Vec<MissionObjective> {
        self.objectives_with_status(ObjectiveStatus::Rewarded)
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use fell_desert_core::SquaddieRef;

    use super::World;

    /// Name of the loaded mission.
    #[must_use]
    pub fn mission_name(world: &World) -> &str {
        &world.name
    }

    /// Finds the reference of the squaddie with the provided stable key.
    #[must_use]
    pub fn squaddie_ref(world: &World, out_of_battle_squaddie_id: &str) -> Option<SquaddieRef> {
        world
            .squaddies
            .iter()
            .find(|squaddie| squaddie.reference.out_of_battle_squaddie_id() == out_of_battle_squaddie_id)
            .map(|squaddie| squaddie.reference.clone())
    }

    /// References of every squaddie in the mission, in declaration order.
    #[must_use]
    pub fn squaddie_refs(world: &World) -> Vec<SquaddieRef> {
        world
            .squaddies
            .iter()
            .map(|squaddie| squaddie.reference.clone())
            .collect()
    }
}

/// Squaddie description used while assembling a world.
#[derive(Clone, Debug)]
pub(crate) struct SquaddieSeed {
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) affiliation: Affiliation,
    pub(crate) position: Option<Coordinate>,
    pub(crate) max_hit_points: u32,
    pub(crate) max_action_points: u32,
    pub(crate) conditions: Vec<SquaddieCondition>,
    pub(crate) action_ids: Vec<String>,
}

#[derive(Clone, Debug)]
struct Squaddie {
    reference: SquaddieRef,
    name: String,
    affiliation: Affiliation,
    position: Option<Coordinate>,
    hit_points: u32,
    max_hit_points: u32,
    action_points: u32,
    max_action_points: u32,
    conditions: Vec<SquaddieCondition>,
    action_ids: Vec<String>,
}

impl Squaddie {
    fn from_seed(in_battle_id: u32, seed: SquaddieSeed) -> Self {
        let mut action_ids = seed.action_ids;
        for default_id in [DEFAULT_MOVE_ACTION_ID, DEFAULT_END_TURN_ACTION_ID] {
            if !action_ids.iter().any(|id| id == default_id) {
                action_ids.push(default_id.to_owned());
            }
        }

        Self {
            reference: SquaddieRef::new(in_battle_id, seed.key),
            name: seed.name,
            affiliation: seed.affiliation,
            position: seed.position,
            hit_points: seed.max_hit_points,
            max_hit_points: seed.max_hit_points,
            action_points: seed.max_action_points,
            max_action_points: seed.max_action_points,
            conditions: seed.conditions,
            action_ids,
        }
    }

    fn can_act(&self) -> bool {
        self.action_points > 0
    }

    fn info(&self) -> SquaddieInfo {
        SquaddieInfo {
            name: self.name.clone(),
            affiliation: self.affiliation,
            current_hit_points: self.hit_points,
            max_hit_points: self.max_hit_points,
            current_action_points: self.action_points,
            maximum_action_points: self.max_action_points,
            conditions: self.conditions.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TrackedObjective {
    pub(crate) objective: MissionObjective,
    pub(crate) status: ObjectiveStatus,
}

impl TrackedObjective {
    fn defeat_affiliation(id: &str, affiliation: Affiliation, reward: MissionReward) -> Self {
        Self {
            objective: MissionObjective {
                id: id.to_owned(),
                criteria: vec![MissionObjectiveCriteria::SquaddiesDefeated(
                    SquaddiesDefeatedCriteria {
                        affiliations: vec![affiliation],
                        squaddie_ids: Vec::new(),
                    },
                )],
                rewards: vec![reward],
            },
            status: ObjectiveStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lini(world: &World) -> SquaddieRef {
        query::squaddie_ref(world, "lini").expect("lini is part of the mission")
    }

    #[test]
    fn new_world_starts_at_turn_zero() {
        let world = World::new();

        assert_eq!(world.current_turn_number(), 0);
        assert_eq!(world.current_phase(), MissionPhase::TurnStart);
        assert_eq!(query::mission_name(&world), "Battle of Fell Desert");
    }

    #[test]
    fn two_transitions_reach_player_turn() {
        let mut world = World::new();

        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurnStart(Affiliation::Player)
        );

        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurn(Affiliation::Player)
        );
    }

    #[test]
    fn player_turn_holds_while_squaddies_can_act() {
        let mut world = World::new();
        for _ in 0..3 {
            world.transition_to_next_phase();
        }

        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurn(Affiliation::Player)
        );
    }

    #[test]
    fn full_cycle_skips_empty_affiliations_and_advances_turn() {
        let mut world = World::new();
        world.transition_to_next_phase();
        world.transition_to_next_phase();
        let lini = lini(&world);
        assert!(world.end_squaddie_turn(&lini));

        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurnEnd(Affiliation::Player)
        );

        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurnStart(Affiliation::Enemy),
            "no allies are deployed, so the enemy goes next"
        );

        world.transition_to_next_phase();
        let demon = query::squaddie_ref(&world, "slither-demon").expect("demon deployed");
        assert_eq!(world.squaddies_who_can_act_this_phase(), vec![demon.clone()]);
        assert!(world.end_squaddie_turn(&demon));

        world.transition_to_next_phase();
        world.transition_to_next_phase();
        assert_eq!(world.current_phase(), MissionPhase::TurnEnd);

        world.transition_to_next_phase();
        assert_eq!(world.current_phase(), MissionPhase::TurnStart);
        assert_eq!(world.current_turn_number(), 1);
    }

    #[test]
    fn turn_start_restores_action_points() {
        let mut world = World::new();
        let lini = lini(&world);
        assert!(world.end_squaddie_turn(&lini));
        assert_eq!(
            world.squaddie_info(&lini).map(|info| info.current_action_points),
            Some(0)
        );

        world.transition_to_next_phase();

        assert_eq!(
            world.squaddie_info(&lini).map(|info| info.current_action_points),
            Some(3)
        );
    }

    #[test]
    fn nobody_acts_outside_affiliation_turns() {
        let world = World::new();
        assert!(world.squaddies_who_can_act_this_phase().is_empty());
    }

    #[test]
    fn melee_action_is_invalid_without_adjacent_foes() {
        let world = World::new();
        let validity = world.squaddie_action_validity(&lini(&world));

        let invalid: Vec<_> = validity
            .invalid_actions
            .iter()
            .map(|action| (action.action_name.as_str(), action.reason.as_str()))
            .collect();
        assert_eq!(invalid, vec![("Scimitar", NO_TARGETS_IN_RANGE)]);

        let valid: Vec<_> = validity
            .valid_actions
            .iter()
            .map(|action| action.action_id.as_str())
            .collect();
        assert_eq!(valid, vec![DEFAULT_MOVE_ACTION_ID, DEFAULT_END_TURN_ACTION_ID]);
    }

    #[test]
    fn spent_action_points_invalidate_costed_actions() {
        let mut world = World::new();
        let lini = lini(&world);
        assert!(world.end_squaddie_turn(&lini));

        let validity = world.squaddie_action_validity(&lini);
        assert_eq!(validity.invalid_actions[0].reason, NOT_ENOUGH_ACTION_POINTS);
    }

    #[test]
    fn undeployed_squaddies_act_but_do_not_start_turns() {
        let mut world = World::from_scenario_toml(
            r#"
            version = 1
            name = "Reinforcements"
            terrain = [". ."]

            [[squaddies]]
            id = "lini"
            name = "Lini"
            affiliation = "Player"
            row = 0
            col = 0
            hit_points = 3
            action_points = 3

            [[squaddies]]
            id = "reserve"
            name = "Reserve"
            affiliation = "Player"
            hit_points = 1
            action_points = 2

            [[squaddies]]
            id = "scout"
            name = "Scout"
            affiliation = "Ally"
            hit_points = 1
            action_points = 2
            "#,
        )
        .expect("scenario should load");
        world.transition_to_next_phase();
        world.transition_to_next_phase();

        let reserve = query::squaddie_ref(&world, "reserve").expect("reserve listed");
        assert_eq!(
            world.squaddies_who_can_act_this_phase(),
            vec![lini(&world), reserve.clone()]
        );

        assert!(world.end_squaddie_turn(&lini(&world)));
        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::AffiliationTurn(Affiliation::Player),
            "the reserve still has action points"
        );

        assert!(world.end_squaddie_turn(&reserve));
        world.transition_to_next_phase();
        world.transition_to_next_phase();
        assert_eq!(
            world.current_phase(),
            MissionPhase::TurnEnd,
            "the off-map ally never gets a turn"
        );
    }

    #[test]
    fn squaddie_refs_are_numbered_in_roster_order() {
        let world = World::new();
        let numbered: Vec<_> = query::squaddie_refs(&world)
            .iter()
            .map(|reference| {
                (
                    reference.in_battle_squaddie_id(),
                    reference.out_of_battle_squaddie_id().to_owned(),
                )
            })
            .collect();
        assert_eq!(
            numbered,
            vec![(0, "lini".to_owned()), (1, "slither-demon".to_owned())]
        );
    }

    #[test]
    fn off_map_coordinates_read_as_walls() {
        let world = World::new();
        assert_eq!(world.terrain_at(Coordinate::new(10, 10)), Terrain::WALL);
        assert_eq!(world.squaddie_at(Coordinate::new(10, 10)), None);
    }

    #[test]
    fn overview_places_squaddies_on_their_tiles() {
        let world = World::new();
        let overview = world.map_overview();
        assert_eq!(overview.dimensions(), world.map_dimensions());

        let placed: Vec<_> = overview
            .squaddies()
            .map(|(id, coordinate)| (id.out_of_battle_squaddie_id().to_owned(), coordinate))
            .collect();
        assert_eq!(
            placed,
            vec![
                ("lini".to_owned(), Coordinate::new(0, 0)),
                ("slither-demon".to_owned(), Coordinate::new(3, 4)),
            ]
        );
    }

    #[test]
    fn objectives_move_between_status_buckets() {
        let mut world = World::new();
        assert_eq!(world.in_progress_objectives().len(), 2);

        assert!(world.set_objective_status("defeat-enemies", ObjectiveStatus::Rewarded));
        assert!(!world.set_objective_status("missing", ObjectiveStatus::Completed));

        assert_eq!(world.in_progress_objectives().len(), 1);
        assert!(world.completed_unrewarded_objectives().is_empty());
        assert_eq!(world.completed_rewarded_objectives()[0].id, "defeat-enemies");
    }
}
