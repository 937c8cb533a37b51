#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Routes one line of console input to the matching inspection system.
//!
//! The dispatcher never mutates the engine. Interaction state lives in a
//! caller-owned [`CommandContext`] that is replaced wholesale whenever a
//! result carries an updated context.

mod command;
mod context;

use std::collections::HashMap;

use fell_desert_core::{Coordinate, MissionEngine, MissionPhase};
use fell_desert_system_coordinate_inspection::inspect_coordinate;
use fell_desert_system_map_rendering::{render_map, MapRenderInfo};
use fell_desert_system_mission_objectives::{format_objectives, gather_objectives};
use fell_desert_system_squaddie_inspection::{
    format_controllable_squaddies, format_squaddie_actions, format_squaddie_details,
    gather_controllable_squaddies,
};
use tracing::debug;

pub use command::{Command, CommandAction};
pub use context::{CommandContext, InteractionPhase};

const NO_SELECTION: &str = "No squaddie selected. Inspect a coordinate with a squaddie first.";

/// Outcome of dispatching one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Route that handled the input.
    pub action: CommandAction,
    /// Text to show the player.
    pub message: String,
    /// Replacement interaction context, when the command changed it.
    pub updated_context: Option<CommandContext>,
}

impl CommandResult {
    fn reply(action: CommandAction, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
            updated_context: None,
        }
    }
}

/// Stateless router from console input to inspection output.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Interprets the raw input against the engine and interaction context.
    ///
    /// Missing engines and selections are reported as messages.
    #[must_use]
    pub fn dispatch(
        &self,
        raw_input: &str,
        engine: Option<&dyn MissionEngine>,
        context: Option<&CommandContext>,
    ) -> CommandResult {
        let command = Command::parse(raw_input);
        let action = command.action();

        let result = match command {
            Command::Quit => CommandResult::reply(action, "Goodbye!"),
            Command::ShowCommands => CommandResult::reply(action, command_help(context)),
            Command::Echo => CommandResult::reply(action, format!("You entered: {raw_input}")),
            Command::ShowMap => with_engine(action, engine, "display the map", show_map),
            Command::LookAtSquaddie => {
                with_engine(action, engine, "look at squaddie details", |engine| {
                    look_at_squaddie(engine, context)
                })
            }
            Command::ListControllableSquaddies => {
                with_engine(action, engine, "list controllable squaddies", |engine| {
                    format_controllable_squaddies(&gather_controllable_squaddies(engine))
                })
            }
            Command::ShowPhase => with_engine(action, engine, "show phase", |engine| {
                format!(
                    "Turn {} - {}",
                    engine.current_turn_number(),
                    engine.current_phase()
                )
            }),
            Command::ShowObjectives => with_engine(action, engine, "show objectives", |engine| {
                let summary = format_objectives(&gather_objectives(engine));
                if summary.is_empty() {
                    "No mission objectives.".to_owned()
                } else {
                    summary
                }
            }),
            Command::InspectCoordinate(coordinate) => inspect(action, engine, coordinate),
        };

        debug!(
            action = %result.action,
            context_updated = result.updated_context.is_some(),
            "dispatched command"
        );
        result
    }
}

/// Advances the engine by one phase and reports the phase it entered.
pub fn transition_to_next_phase(engine: &mut dyn MissionEngine) -> MissionPhase {
    engine.transition_to_next_phase();
    engine.current_phase()
}

/// Lists the console commands; the look command only appears with a selection.
#[must_use]
pub fn command_help(context: Option<&CommandContext>) -> String {
    let has_selection = context.is_some_and(|context| context.selected_squaddie.is_some());

    let mut lines = vec![
        "Commands:",
        "  M - Show the map",
        "  row, col - Inspect a coordinate",
    ];
    if has_selection {
        lines.push("  L - Look at selected squaddie");
    }
    lines.extend([
        "  W - Who can act this phase?",
        "  P - Show current phase",
        "  O - Show mission objectives",
        "  ? - Show all commands",
        "  Q - Quit the game",
    ]);
    lines.join("\n")
}

fn with_engine(
    action: CommandAction,
    engine: Option<&dyn MissionEngine>,
    purpose: &str,
    respond: impl FnOnce(&dyn MissionEngine) -> String,
) -> CommandResult {
    let message = match engine {
        Some(engine) => respond(engine),
        None => format!("No engine available to {purpose}."),
    };
    CommandResult::reply(action, message)
}

fn show_map(engine: &dyn MissionEngine) -> String {
    let overview = engine.map_overview();
    let info = MapRenderInfo::gather(engine, &overview);
    render_map(&overview, Some(&info))
}

fn look_at_squaddie(engine: &dyn MissionEngine, context: Option<&CommandContext>) -> String {
    let Some(selected) = context.and_then(|context| context.selected_squaddie.as_ref()) else {
        return NO_SELECTION.to_owned();
    };
    let Some(info) = engine.squaddie_info(selected) else {
        return format!(
            "Selected squaddie {} is no longer on the map.",
            selected.out_of_battle_squaddie_id()
        );
    };

    let validity = engine.squaddie_action_validity(selected);
    let actions_by_id: HashMap<_, _> = validity
        .valid_actions
        .iter()
        .filter_map(|action| engine.action_by_id(&action.action_id))
        .map(|definition| (definition.id.clone(), definition))
        .collect();

    let details = format_squaddie_details(&info);
    let actions = format_squaddie_actions(&validity, &actions_by_id);
    if actions.is_empty() {
        details
    } else {
        format!("{details}\n{actions}")
    }
}

fn inspect(
    action: CommandAction,
    engine: Option<&dyn MissionEngine>,
    coordinate: Coordinate,
) -> CommandResult {
    let Some(engine) = engine else {
        return CommandResult::reply(action, "No engine available to inspect coordinates.");
    };

    CommandResult {
        action,
        message: inspect_coordinate(engine, coordinate),
        updated_context: Some(CommandContext::browsing(engine.squaddie_at(coordinate))),
    }
}
