#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Fell Desert mission console.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use fell_desert_core::{MissionEngine, WELCOME_BANNER};
use fell_desert_system_command_dispatch::{CommandAction, CommandContext, CommandDispatcher};
use fell_desert_world::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Text console for the Battle of Fell Desert", long_about = None)]
struct Cli {
    /// Mission scenario TOML file; the built-in Fell Desert mission is used when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,
    /// Tracing filter directives; overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

/// Entry point for the Fell Desert command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.log_filter.as_deref())?;

    let world = load_world(cli.scenario.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&world, stdin.lock(), stdout.lock())
}

fn install_tracing(directives: Option<&str>) -> Result<()> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
    Ok(())
}

fn load_world(scenario: Option<&Path>) -> Result<World> {
    let Some(path) = scenario else {
        return Ok(World::new());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario at {}", path.display()))?;
    let world = World::from_scenario_toml(&contents)
        .with_context(|| format!("failed to load scenario at {}", path.display()))?;
    info!(path = %path.display(), "using scenario file");
    Ok(world)
}

/// Reads commands line by line until the player quits or input ends.
fn run_console(
    engine: &dyn MissionEngine,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    writeln!(output, "{WELCOME_BANNER}")?;
    writeln!(output, "{}", "=".repeat(WELCOME_BANNER.len()))?;
    writeln!(output, "Game engine initialized.")?;
    writeln!(output, "Enter 'Q' to quit, '?' for commands.")?;
    writeln!(output)?;

    let dispatcher = CommandDispatcher;
    let mut context = CommandContext::default();
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("failed to read console input")?;

        let result = dispatcher.dispatch(&line, Some(engine), Some(&context));
        writeln!(output, "{}", result.message)?;
        if let Some(updated) = result.updated_context {
            context = updated;
        }
        if result.action == CommandAction::Quit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let world = World::new();
        let mut output = Vec::new();
        run_console(&world, script.as_bytes(), &mut output).expect("console session should run");
        String::from_utf8(output).expect("console output is utf-8")
    }

    #[test]
    fn banner_precedes_first_prompt() {
        let transcript = session("q\n");

        assert!(
            transcript.starts_with(
                "Battle of Fell Desert CLI\n=========================\nGame engine initialized.\nEnter 'Q' to quit, '?' for commands.\n\n> Goodbye!\n"
            ),
            "unexpected transcript: {transcript}",
        );
    }

    #[test]
    fn selection_persists_between_lines() {
        let transcript = session("0 0\nL\nQ\nM\n");

        assert!(transcript.contains("Affiliation: PLAYER"), "look should see lini: {transcript}");
        assert!(
            !transcript.contains("Map:"),
            "commands after quit must not run: {transcript}",
        );
    }

    #[test]
    fn input_end_closes_session() {
        let transcript = session("hello\n");

        assert!(transcript.ends_with("> You entered: hello\n> \n"));
    }
}
