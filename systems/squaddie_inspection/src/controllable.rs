use fell_desert_core::{Coordinate, MissionEngine, SquaddieRef};

/// Roster entry for a squaddie able to act in the current phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllableSquaddieEntry {
    /// Reference to the squaddie.
    pub squaddie: SquaddieRef,
    /// Display name.
    pub name: String,
    /// Action points left this turn.
    pub current_action_points: u32,
    /// Action points restored at the start of the squaddie's turn.
    pub maximum_action_points: u32,
    /// Map position; `None` when the squaddie is off the map.
    pub coordinate: Option<Coordinate>,
}

/// Collects roster entries for every squaddie the engine reports as able to act.
///
/// Squaddies the engine cannot describe are skipped.
#[must_use]
pub fn gather_controllable_squaddies(engine: &dyn MissionEngine) -> Vec<ControllableSquaddieEntry> {
    engine
        .squaddies_who_can_act_this_phase()
        .into_iter()
        .filter_map(|squaddie| {
            let info = engine.squaddie_info(&squaddie)?;
            let coordinate = engine.squaddie_position(&squaddie);
            Some(ControllableSquaddieEntry {
                squaddie,
                name: info.name,
                current_action_points: info.current_action_points,
                maximum_action_points: info.maximum_action_points,
                coordinate,
            })
        })
        .collect()
}

/// Formats the roster of squaddies who can act.
#[must_use]
pub fn format_controllable_squaddies(entries: &[ControllableSquaddieEntry]) -> String {
    if entries.is_empty() {
        return "No squaddies can act this phase.".to_owned();
    }

    let mut lines = vec!["Squaddies who can act:".to_owned()];
    for entry in entries {
        let position = entry
            .coordinate
            .map_or_else(|| "(off map)".to_owned(), |coordinate| coordinate.to_string());
        lines.push(format!(
            "  {} {position} - AP: {}/{}",
            entry.name, entry.current_action_points, entry.maximum_action_points
        ));
    }
    lines.join("\n")
}
