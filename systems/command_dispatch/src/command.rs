use std::fmt;

use fell_desert_core::Coordinate;
use fell_desert_system_coordinate_inspection::parse_coordinate;

/// Command recognised from one line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Render the map.
    ShowMap,
    /// List the available commands.
    ShowCommands,
    /// Describe the selected squaddie and its actions.
    LookAtSquaddie,
    /// List squaddies able to act this phase.
    ListControllableSquaddies,
    /// Report the turn and phase.
    ShowPhase,
    /// Summarise the mission objectives.
    ShowObjectives,
    /// Describe one map coordinate.
    InspectCoordinate(Coordinate),
    /// Unrecognised input.
    Echo,
}

impl Command {
    /// Recognises a command, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw_input: &str) -> Self {
        match raw_input.trim().to_uppercase().as_str() {
            "Q" => Self::Quit,
            "M" => Self::ShowMap,
            "?" => Self::ShowCommands,
            "L" => Self::LookAtSquaddie,
            "W" => Self::ListControllableSquaddies,
            "P" => Self::ShowPhase,
            "O" => Self::ShowObjectives,
            _ => parse_coordinate(raw_input).map_or(Self::Echo, Self::InspectCoordinate),
        }
    }

    /// Action tag reported for the command.
    #[must_use]
    pub const fn action(self) -> CommandAction {
        match self {
            Self::Quit => CommandAction::Quit,
            Self::ShowMap => CommandAction::ShowMap,
            Self::ShowCommands => CommandAction::ShowCommands,
            Self::LookAtSquaddie => CommandAction::LookAtSquaddie,
            Self::ListControllableSquaddies => CommandAction::ListControllableSquaddies,
            Self::ShowPhase => CommandAction::ShowPhase,
            Self::ShowObjectives => CommandAction::ShowObjectives,
            Self::InspectCoordinate(_) => CommandAction::InspectCoordinate,
            Self::Echo => CommandAction::Echo,
        }
    }
}

/// Tag describing which route handled a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandAction {
    /// The player asked to leave.
    Quit,
    /// The map was rendered.
    ShowMap,
    /// The command list was shown.
    ShowCommands,
    /// The selected squaddie was described.
    LookAtSquaddie,
    /// The acting squaddies were listed.
    ListControllableSquaddies,
    /// The phase was reported.
    ShowPhase,
    /// The objectives were summarised.
    ShowObjectives,
    /// A coordinate was inspected.
    InspectCoordinate,
    /// The input was echoed back.
    Echo,
}

impl CommandAction {
    /// Stable tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::ShowMap => "showMap",
            Self::ShowCommands => "showCommands",
            Self::LookAtSquaddie => "lookAtSquaddie",
            Self::ListControllableSquaddies => "listControllableSquaddies",
            Self::ShowPhase => "showPhase",
            Self::ShowObjectives => "showObjectives",
            Self::InspectCoordinate => "inspectCoordinate",
            Self::Echo => "echo",
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_ignore_case_and_padding() {
        for (input, expected) in [
            ("q", Command::Quit),
            ("  M ", Command::ShowMap),
            ("?", Command::ShowCommands),
            ("\tl", Command::LookAtSquaddie),
            ("w", Command::ListControllableSquaddies),
            ("p\n", Command::ShowPhase),
            (" o", Command::ShowObjectives),
        ] {
            assert_eq!(Command::parse(input), expected, "`{input}` was misrouted");
        }
    }

    #[test]
    fn coordinates_fall_between_letters_and_echo() {
        assert_eq!(
            Command::parse(" (1, 2) "),
            Command::InspectCoordinate(Coordinate::new(1, 2))
        );
        assert_eq!(Command::parse("hello"), Command::Echo);
        assert_eq!(Command::parse("5"), Command::Echo);
        assert_eq!(Command::parse("qq"), Command::Echo);
    }

    #[test]
    fn action_tags() {
        assert_eq!(Command::parse("W").action().as_str(), "listControllableSquaddies");
        assert_eq!(Command::parse("0 0").action().to_string(), "inspectCoordinate");
    }
}
