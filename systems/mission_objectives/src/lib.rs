#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Mission objective and failure condition summaries.

use fell_desert_core::{
    MissionEngine, MissionObjective, MissionObjectiveCriteria, SquaddiesDefeatedCriteria,
};

/// One line of the objective summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionObjectiveDisplayEntry {
    /// Human readable description of the objective criteria.
    pub description: String,
    /// Whether the objective has been achieved.
    pub is_completed: bool,
    /// Whether achieving the objective loses the mission.
    pub is_failure_condition: bool,
}

/// Collects display entries for every objective, in-progress ones first.
#[must_use]
pub fn gather_objectives(engine: &dyn MissionEngine) -> Vec<MissionObjectiveDisplayEntry> {
    let in_progress = engine
        .in_progress_objectives()
        .into_iter()
        .map(|objective| (objective, false));
    let completed = engine
        .completed_unrewarded_objectives()
        .into_iter()
        .chain(engine.completed_rewarded_objectives())
        .map(|objective| (objective, true));

    in_progress
        .chain(completed)
        .map(|(objective, is_completed)| describe(engine, &objective, is_completed))
        .collect()
}

/// Formats objectives and failure conditions, completed entries first in each section.
///
/// Returns an empty string when there are no entries.
#[must_use]
pub fn format_objectives(entries: &[MissionObjectiveDisplayEntry]) -> String {
    let mut lines = Vec::new();
    for (header, failures) in [("Objective:", false), ("Failure:", true)] {
        let mut section: Vec<&MissionObjectiveDisplayEntry> = entries
            .iter()
            .filter(|entry| entry.is_failure_condition == failures)
            .collect();
        if section.is_empty() {
            continue;
        }
        section.sort_by_key(|entry| !entry.is_completed);

        lines.push(header.to_owned());
        for entry in section {
            let marker = if entry.is_completed { " [DONE]" } else { "" };
            lines.push(format!("- {}{marker}", entry.description));
        }
    }
    lines.join("\n")
}

fn describe(
    engine: &dyn MissionEngine,
    objective: &MissionObjective,
    is_completed: bool,
) -> MissionObjectiveDisplayEntry {
    let description = objective
        .criteria
        .iter()
        .map(|criterion| match criterion {
            MissionObjectiveCriteria::SquaddiesDefeated(criteria) => {
                describe_defeat(engine, criteria)
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    MissionObjectiveDisplayEntry {
        description,
        is_completed,
        is_failure_condition: objective.has_failure_reward(),
    }
}

fn describe_defeat(engine: &dyn MissionEngine, criteria: &SquaddiesDefeatedCriteria) -> String {
    if let Some(first) = criteria.affiliations.first() {
        let targets: Vec<String> = engine
            .map_overview()
            .squaddies()
            .filter(|(squaddie, _)| {
                engine
                    .squaddie_info(squaddie)
                    .is_some_and(|info| criteria.affiliations.contains(&info.affiliation))
            })
            .map(|(squaddie, _)| squaddie.out_of_battle_squaddie_id().to_owned())
            .collect();
        return format!("Defeat {}: {}", first.objective_word(), targets.join(", "));
    }

    if !criteria.squaddie_ids.is_empty() {
        return format!("Defeat: {}", criteria.squaddie_ids.join(", "));
    }

    "Defeat squaddies".to_owned()
}
