use fell_desert_core::{SquaddieCondition, SquaddieInfo};

/// Formats a condition as `Name`, `Name: amount` and/or `(N turns remaining)`.
#[must_use]
pub fn format_condition(condition: &SquaddieCondition) -> String {
    let mut formatted = condition.kind.display_name().to_owned();
    if let Some(amount) = condition.amount {
        formatted.push_str(&format!(": {amount}"));
    }
    if let Some(duration) = condition.duration {
        formatted.push_str(&format!(" ({duration} turns remaining)"));
    }
    formatted
}

/// Formats the status block shown when looking at a squaddie.
#[must_use]
pub fn format_squaddie_details(info: &SquaddieInfo) -> String {
    let mut lines = vec![
        info.name.clone(),
        format!("Affiliation: {}", info.affiliation.tag()),
        format!(
            "Hit Points: {}/{}",
            info.current_hit_points, info.max_hit_points
        ),
        format!(
            "Action Points: {}/{}",
            info.current_action_points, info.maximum_action_points
        ),
    ];

    if !info.conditions.is_empty() {
        lines.push("Conditions:".to_owned());
        lines.extend(
            info.conditions
                .iter()
                .map(|condition| format!("  {}", format_condition(condition))),
        );
    }

    lines.join("\n")
}
