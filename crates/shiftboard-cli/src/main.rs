//! Shiftboard CLI Application
//!
//! Command-line front end for the shiftboard task tracker.

mod args;
mod cli;
mod handler;
mod renderer;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{ListTasksArgs, TaskFilterArg};
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use shiftboard_core::TrackerBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        tasks,
        operator,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_seed_path(tasks)
        .build()
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shiftboard started");

    let mut cli = Cli::new(tracker, renderer, operator);
    match command {
        Some(Commands::List(args)) => cli.list_tasks(&args),
        Some(Commands::Show(args)) => cli.show_task(&args),
        Some(Commands::Session) => {
            info!("Starting session");
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            cli.run_session(stdin.lock(), interactive)
        }
        None => cli.list_tasks(&ListTasksArgs {
            filter: TaskFilterArg::All,
            json: false,
        }),
    }
}
