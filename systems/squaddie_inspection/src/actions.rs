use std::collections::HashMap;

use fell_desert_core::{ActionDefinition, ActionPointCost, SquaddieActionValidity};

/// Formats the suffix describing how many action points an action spends.
///
/// Free and unknown costs produce an empty suffix.
#[must_use]
pub fn format_action_point_cost(cost: Option<ActionPointCost>) -> String {
    match cost {
        None | Some(ActionPointCost::Points(0)) => String::new(),
        Some(ActionPointCost::All) => " (all AP)".to_owned(),
        Some(ActionPointCost::Points(points)) => format!(" ({points} AP)"),
    }
}

/// Formats the action menu, invalid actions first.
///
/// Returns an empty string when the squaddie has no actions at all.
#[must_use]
pub fn format_squaddie_actions(
    validity: &SquaddieActionValidity,
    actions_by_id: &HashMap<String, ActionDefinition>,
) -> String {
    if validity.invalid_actions.is_empty() && validity.valid_actions.is_empty() {
        return String::new();
    }

    let mut lines = vec!["Actions:".to_owned()];

    if !validity.invalid_actions.is_empty() {
        lines.push("  Invalid:".to_owned());
        for action in &validity.invalid_actions {
            lines.push(format!("    {} - {}", action.action_name, action.reason));
        }
    }

    if !validity.valid_actions.is_empty() {
        lines.push("  Valid:".to_owned());
        for action in &validity.valid_actions {
            let cost = actions_by_id
                .get(&action.action_id)
                .and_then(|definition| definition.action_point_cost);
            lines.push(format!(
                "    {}{}",
                action.action_name,
                format_action_point_cost(cost)
            ));
        }
    }

    lines.join("\n")
}
