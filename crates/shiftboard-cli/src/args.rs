use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListTasksArgs, ShowTaskArgs};

/// Track work shifts against operator tasks
///
/// Shiftboard keeps a list of tasks in memory, seeded from a JSON file or a
/// built-in demo set. Shifts are opened and closed inside a `session`; state
/// is discarded when the process exits.
#[derive(Parser)]
#[command(version, about, name = "shiftboard")]
pub struct Args {
    /// Path to a JSON seed file with the task list. Defaults to
    /// $XDG_CONFIG_HOME/shiftboard/tasks.json, then the demo tasks
    #[arg(long, global = true)]
    pub tasks: Option<PathBuf>,

    /// Operator name shown in the task list header
    #[arg(long, global = true)]
    pub operator: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shiftboard CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show a task with its shifts
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Read shift commands from stdin, one per line
    Session,
}
