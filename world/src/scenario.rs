use std::collections::HashSet;

use fell_desert_core::{
    ActionDefinition, ActionPointCost, Affiliation, Coordinate, MapDimensions, MissionObjective,
    MissionObjectiveCriteria, MissionReward, SquaddieCondition, SquaddieConditionType,
    SquaddiesDefeatedCriteria, Terrain,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{SquaddieSeed, TrackedObjective, World, DEFAULT_END_TURN_ACTION_ID, DEFAULT_MOVE_ACTION_ID};

/// Scenario file format version understood by the loader.
pub const SUPPORTED_SCENARIO_VERSION: u32 = 1;

/// Bookkeeping state of a mission objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    /// Objective has not been achieved yet.
    #[default]
    InProgress,
    /// Objective is achieved but its rewards have not been granted.
    Completed,
    /// Objective is achieved and its rewards were granted.
    Rewarded,
}

/// Errors raised while loading a mission scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The document is not valid TOML or does not match the scenario layout.
    #[error("failed to parse scenario toml contents")]
    Parse(#[from] toml::de::Error),
    /// The document declares a format version the loader does not understand.
    #[error("unsupported scenario version {found}; expected {expected}")]
    UnsupportedVersion {
        /// Version declared by the document.
        found: u32,
        /// Version supported by the loader.
        expected: u32,
    },
    /// The terrain table has no rows or no columns.
    #[error("scenario terrain must contain at least one row and one column")]
    EmptyTerrain,
    /// A terrain row differs in width from the first row.
    #[error("terrain row {row} has {found} tiles; expected {expected}")]
    RaggedTerrain {
        /// Offending row index.
        row: usize,
        /// Tiles found in the row.
        found: usize,
        /// Tiles found in the first row.
        expected: usize,
    },
    /// A terrain token is not one of the known symbols.
    #[error("unknown terrain token `{token}` at row {row}, column {col}")]
    UnknownTerrain {
        /// Unrecognised token.
        token: String,
        /// Row containing the token.
        row: usize,
        /// Column containing the token.
        col: usize,
    },
    /// Two squaddies share the same identifier.
    #[error("squaddie `{0}` is declared more than once")]
    DuplicateSquaddie(String),
    /// Two actions share the same identifier.
    #[error("action `{0}` is declared more than once")]
    DuplicateAction(String),
    /// A squaddie is placed outside the terrain bounds.
    #[error("squaddie `{squaddie}` is placed off the map at {coordinate}")]
    SquaddieOffMap {
        /// Squaddie identifier.
        squaddie: String,
        /// Requested placement.
        coordinate: Coordinate,
    },
    /// Two squaddies are placed on the same tile.
    #[error("squaddies `{first}` and `{second}` both occupy {coordinate}")]
    TileOccupied {
        /// Squaddie placed first.
        first: String,
        /// Squaddie placed second.
        second: String,
        /// Contested tile.
        coordinate: Coordinate,
    },
    /// A squaddie references an action that is not declared.
    #[error("squaddie `{squaddie}` knows undeclared action `{action}`")]
    UnknownAction {
        /// Squaddie identifier.
        squaddie: String,
        /// Missing action identifier.
        action: String,
    },
    /// An action point cost keyword other than `all` was used.
    #[error("action `{action}` has action point cost `{value}`; expected a number or \"all\"")]
    InvalidActionPoints {
        /// Action identifier.
        action: String,
        /// Rejected keyword.
        value: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    version: u32,
    name: String,
    terrain: Vec<String>,
    #[serde(default)]
    actions: Vec<ActionEntry>,
    #[serde(default)]
    squaddies: Vec<SquaddieEntry>,
    #[serde(default)]
    objectives: Vec<ObjectiveEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionEntry {
    id: String,
    name: String,
    #[serde(default)]
    action_points: Option<CostEntry>,
    #[serde(default)]
    range: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CostEntry {
    Points(u32),
    Keyword(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SquaddieEntry {
    id: String,
    name: String,
    affiliation: Affiliation,
    #[serde(default)]
    row: Option<u32>,
    #[serde(default)]
    col: Option<u32>,
    hit_points: u32,
    action_points: u32,
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    conditions: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConditionEntry {
    kind: SquaddieConditionType,
    #[serde(default)]
    amount: Option<i32>,
    #[serde(default)]
    duration: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectiveEntry {
    id: String,
    #[serde(default)]
    affiliations: Vec<Affiliation>,
    #[serde(default)]
    squaddie_ids: Vec<String>,
    #[serde(default)]
    rewards: Vec<MissionReward>,
    #[serde(default)]
    status: ObjectiveStatus,
}

pub(crate) fn load(contents: &str) -> Result<World, ScenarioError> {
    let file: ScenarioFile = toml::from_str(contents)?;
    if file.version != SUPPORTED_SCENARIO_VERSION {
        return Err(ScenarioError::UnsupportedVersion {
            found: file.version,
            expected: SUPPORTED_SCENARIO_VERSION,
        });
    }

    let (dimensions, terrain) = parse_terrain(&file.terrain)?;
    let actions = parse_actions(file.actions)?;
    let squaddies = parse_squaddies(file.squaddies, dimensions, &actions)?;
    let objectives = file
        .objectives
        .into_iter()
        .map(|entry| TrackedObjective {
            objective: MissionObjective {
                id: entry.id,
                criteria: vec![MissionObjectiveCriteria::SquaddiesDefeated(
                    SquaddiesDefeatedCriteria {
                        affiliations: entry.affiliations,
                        squaddie_ids: entry.squaddie_ids,
                    },
                )],
                rewards: entry.rewards,
            },
            status: entry.status,
        })
        .collect::<Vec<_>>();

    info!(
        mission = %file.name,
        width = dimensions.width(),
        height = dimensions.height(),
        squaddies = squaddies.len(),
        objectives = objectives.len(),
        "loaded mission scenario"
    );

    Ok(World::assemble(
        file.name, dimensions, terrain, actions, squaddies, objectives,
    ))
}

fn parse_terrain(rows: &[String]) -> Result<(MapDimensions, Vec<Terrain>), ScenarioError> {
    let mut width = None;
    let mut terrain = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let expected = *width.get_or_insert(tokens.len());
        if tokens.len() != expected {
            return Err(ScenarioError::RaggedTerrain {
                row,
                found: tokens.len(),
                expected,
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            terrain.push(parse_terrain_token(token).ok_or_else(|| {
                ScenarioError::UnknownTerrain {
                    token: token.to_owned(),
                    row,
                    col,
                }
            })?);
        }
    }

    let width = width.unwrap_or(0);
    if width == 0 {
        return Err(ScenarioError::EmptyTerrain);
    }
    let dimensions = MapDimensions::new(
        u32::try_from(width).map_err(|_| ScenarioError::EmptyTerrain)?,
        u32::try_from(rows.len()).map_err(|_| ScenarioError::EmptyTerrain)?,
    );
    Ok((dimensions, terrain))
}

fn parse_terrain_token(token: &str) -> Option<Terrain> {
    match token {
        "." => Some(Terrain::STANDARD),
        "~" => Some(Terrain::DIFFICULT),
        "_" => Some(Terrain::PIT),
        "#" => Some(Terrain::WALL),
        _ => None,
    }
}

fn parse_actions(entries: Vec<ActionEntry>) -> Result<Vec<ActionDefinition>, ScenarioError> {
    let mut seen: HashSet<String> = [DEFAULT_MOVE_ACTION_ID, DEFAULT_END_TURN_ACTION_ID]
        .into_iter()
        .map(str::to_owned)
        .collect();
    let mut actions = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.id.clone()) {
            return Err(ScenarioError::DuplicateAction(entry.id));
        }
        let action_point_cost = match entry.action_points {
            None => None,
            Some(CostEntry::Points(points)) => Some(ActionPointCost::Points(points)),
            Some(CostEntry::Keyword(keyword)) if keyword.eq_ignore_ascii_case("all") => {
                Some(ActionPointCost::All)
            }
            Some(CostEntry::Keyword(value)) => {
                return Err(ScenarioError::InvalidActionPoints {
                    action: entry.id,
                    value,
                });
            }
        };
        actions.push(ActionDefinition {
            id: entry.id,
            name: entry.name,
            action_point_cost,
            range: entry.range,
        });
    }
    Ok(actions)
}

fn parse_squaddies(
    entries: Vec<SquaddieEntry>,
    dimensions: MapDimensions,
    actions: &[ActionDefinition],
) -> Result<Vec<SquaddieSeed>, ScenarioError> {
    let mut seen_ids = HashSet::new();
    let mut occupied: Vec<(Coordinate, String)> = Vec::new();
    let mut seeds = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen_ids.insert(entry.id.clone()) {
            return Err(ScenarioError::DuplicateSquaddie(entry.id));
        }

        let position = match (entry.row, entry.col) {
            (Some(row), Some(col)) => Some(Coordinate::new(row, col)),
            _ => None,
        };
        if let Some(coordinate) = position {
            if !dimensions.contains(coordinate) {
                return Err(ScenarioError::SquaddieOffMap {
                    squaddie: entry.id,
                    coordinate,
                });
            }
            if let Some((_, first)) = occupied.iter().find(|(taken, _)| *taken == coordinate) {
                return Err(ScenarioError::TileOccupied {
                    first: first.clone(),
                    second: entry.id,
                    coordinate,
                });
            }
            occupied.push((coordinate, entry.id.clone()));
        }

        let is_known = |action_id: &str| {
            action_id == DEFAULT_MOVE_ACTION_ID
                || action_id == DEFAULT_END_TURN_ACTION_ID
                || actions.iter().any(|action| action.id == action_id)
        };
        if let Some(missing) = entry.actions.iter().find(|id| !is_known(id.as_str())) {
            return Err(ScenarioError::UnknownAction {
                squaddie: entry.id.clone(),
                action: missing.clone(),
            });
        }

        seeds.push(SquaddieSeed {
            key: entry.id,
            name: entry.name,
            affiliation: entry.affiliation,
            position,
            max_hit_points: entry.hit_points,
            max_action_points: entry.action_points,
            conditions: entry
                .conditions
                .into_iter()
                .map(|condition| {
                    SquaddieCondition::new(condition.kind, condition.amount, condition.duration)
                })
                .collect(),
            action_ids: entry.actions,
        });
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use fell_desert_core::MissionEngine;

    use super::*;
    use crate::query;

    const MINIMAL: &str = r#"
        version = 1
        name = "Training Grounds"
        terrain = [". ~", "_ #"]

        [[actions]]
        id = "shove"
        name = "Shove"
        action_points = "all"
        range = 1

        [[squaddies]]
        id = "recruit"
        name = "Recruit"
        affiliation = "Player"
        row = 0
        col = 0
        hit_points = 4
        action_points = 2
        actions = ["shove"]

        [[squaddies.conditions]]
        kind = "Armor"
        amount = 2
        duration = 1

        [[squaddies]]
        id = "reserve"
        name = "Reserve"
        affiliation = "Ally"
        hit_points = 1
        action_points = 1

        [[objectives]]
        id = "survive"
        affiliations = ["Player"]
        rewards = ["MissionFailure"]
        status = "completed"
    "#;

    #[test]
    fn minimal_scenario_loads() {
        let world = load(MINIMAL).expect("scenario should load");

        assert_eq!(query::mission_name(&world), "Training Grounds");
        assert_eq!(world.map_dimensions(), MapDimensions::new(2, 2));
        assert_eq!(world.terrain_at(Coordinate::new(1, 0)), Terrain::PIT);
        assert_eq!(world.terrain_at(Coordinate::new(1, 1)), Terrain::WALL);

        let recruit = query::squaddie_ref(&world, "recruit").expect("recruit declared");
        let info = world.squaddie_info(&recruit).expect("recruit info");
        assert_eq!(info.conditions[0].kind, SquaddieConditionType::Armor);
        assert_eq!(info.conditions[0].amount, Some(2));

        let shove = world.action_by_id("shove").expect("shove declared");
        assert_eq!(shove.action_point_cost, Some(ActionPointCost::All));

        let reserve = query::squaddie_ref(&world, "reserve").expect("reserve declared");
        assert_eq!(world.squaddie_position(&reserve), None, "reserve has no placement");

        assert_eq!(world.completed_unrewarded_objectives()[0].id, "survive");
    }

    #[test]
    fn rejects_unsupported_version() {
        let contents = MINIMAL.replacen("version = 1", "version = 7", 1);
        let result = load(&contents);
        assert!(
            matches!(result, Err(ScenarioError::UnsupportedVersion { found: 7, .. })),
            "version 7 should be rejected"
        );
    }

    #[test]
    fn rejects_ragged_terrain() {
        let contents = MINIMAL.replacen(r#""_ #""#, r#""_""#, 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::RaggedTerrain { row: 1, found: 1, expected: 2 })
        ));
    }

    #[test]
    fn rejects_unknown_terrain_tokens() {
        let contents = MINIMAL.replacen(r#""_ #""#, r#""_ X""#, 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::UnknownTerrain { row: 1, col: 1, .. })
        ));
    }

    #[test]
    fn rejects_squaddies_outside_the_map() {
        let contents = MINIMAL.replacen("row = 0", "row = 5", 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::SquaddieOffMap { .. })
        ));
    }

    #[test]
    fn rejects_undeclared_actions() {
        let contents = MINIMAL.replacen(r#"actions = ["shove"]"#, r#"actions = ["kick"]"#, 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::UnknownAction { .. })
        ));
    }

    #[test]
    fn rejects_unknown_action_point_keywords() {
        let contents = MINIMAL.replacen(r#"action_points = "all""#, r#"action_points = "most""#, 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::InvalidActionPoints { .. })
        ));
    }

    #[test]
    fn rejects_redefining_default_actions() {
        let contents = MINIMAL.replacen(r#"id = "shove""#, r#"id = "default-move""#, 1);
        assert!(matches!(
            load(&contents),
            Err(ScenarioError::DuplicateAction(_))
        ));
    }
}
