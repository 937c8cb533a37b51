#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Coordinate parsing and single-tile inspection for the mission console.

use std::sync::LazyLock;

use fell_desert_core::{Coordinate, MissionEngine};
use regex::Regex;

static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(([0-9]+)[,\s]+([0-9]+)\)|([0-9]+)[,\s]+([0-9]+))$").expect("valid regex")
});

/// Parses free text such as `2, 0`, `3 5`, `(6, 10)` or `(1 2)` into a coordinate.
///
/// Surrounding whitespace is ignored. Parentheses are optional but must be balanced.
/// Values that do not fit a `u32` are rejected.
#[must_use]
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let captures = COORDINATE_RE.captures(input.trim())?;
    let row = captures.get(1).or_else(|| captures.get(3))?;
    let col = captures.get(2).or_else(|| captures.get(4))?;
    Some(Coordinate::new(
        row.as_str().parse().ok()?,
        col.as_str().parse().ok()?,
    ))
}

/// Describes the terrain and occupant of one coordinate.
#[must_use]
pub fn inspect_coordinate(engine: &dyn MissionEngine, coordinate: Coordinate) -> String {
    let dimensions = engine.map_dimensions();
    if !dimensions.contains(coordinate) {
        return format!(
            "{coordinate} is off map (rows less than {} and columns less than {} are valid.)",
            dimensions.height(),
            dimensions.width()
        );
    }

    let terrain = engine.terrain_at(coordinate);
    let mut lines = vec![format!("{coordinate}: {}", terrain.kind().name())];

    if let Some(info) = engine
        .squaddie_at(coordinate)
        .and_then(|squaddie| engine.squaddie_info(&squaddie))
    {
        lines.push(info.name);
        lines.push(format!(
            "  Hit Points: {}/{}",
            info.current_hit_points, info.max_hit_points
        ));
        lines.push(format!(
            "  Action Points: {}/{}",
            info.current_action_points, info.maximum_action_points
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        assert_eq!(parse_coordinate("2, 0"), Some(Coordinate::new(2, 0)));
        assert_eq!(parse_coordinate("3 5"), Some(Coordinate::new(3, 5)));
        assert_eq!(parse_coordinate("(6, 10)"), Some(Coordinate::new(6, 10)));
        assert_eq!(parse_coordinate("(1 2)"), Some(Coordinate::new(1, 2)));
        assert_eq!(parse_coordinate("  4,,\t7  "), Some(Coordinate::new(4, 7)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "1", "a, b", "1, 2, 3", "-1, 2", "1.5, 2", "(1, 2", "1, 2)", "( 1, 2)"] {
            assert_eq!(parse_coordinate(input), None, "`{input}` should not parse");
        }
    }

    #[test]
    fn rejects_values_beyond_coordinate_range() {
        assert_eq!(parse_coordinate("99999999999, 1"), None);
    }
}
