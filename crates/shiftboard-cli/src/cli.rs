//! Command-line argument types using clap.
//!
//! Arguments are parsed into CLI wrapper structs and converted to the core
//! parameter types with `From`, so clap attributes never leak into
//! `shiftboard-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! The same wrappers serve the top-level commands and the line commands read
//! by `session`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use shiftboard_core::{
    params::{Id, ListTasks, Transition},
    Action, TaskFilter, TaskId,
};

/// List tasks
#[derive(Args, Clone)]
pub struct ListTasksArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value_t = TaskFilterArg::All)]
    pub filter: TaskFilterArg,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ListTasksArgs> for ListTasks {
    fn from(val: &ListTasksArgs) -> Self {
        ListTasks {
            filter: val.filter.into(),
        }
    }
}

/// Show details of a task
///
/// Displays the task's status, expected time, description, and every shift
/// with its start, end, and duration.
#[derive(Args, Clone)]
pub struct ShowTaskArgs {
    #[arg(help = "Identifier of the task to show")]
    pub id: String,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ShowTaskArgs> for Id {
    fn from(val: &ShowTaskArgs) -> Self {
        Id {
            id: TaskId::from(val.id.as_str()),
        }
    }
}

/// Address a single task
#[derive(Args, Clone)]
pub struct TaskIdArgs {
    #[arg(help = "Identifier of the task")]
    pub id: String,
}

impl TaskIdArgs {
    /// Pairs the task with an action.
    pub fn transition(&self, action: Action) -> Transition {
        Transition {
            id: TaskId::from(self.id.as_str()),
            action,
        }
    }
}

/// Task filter values accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TaskFilterArg {
    /// Every task
    All,
    /// Tasks not yet completed
    Todo,
    /// Completed tasks
    Completed,
}

impl From<TaskFilterArg> for TaskFilter {
    fn from(val: TaskFilterArg) -> Self {
        match val {
            TaskFilterArg::All => TaskFilter::All,
            TaskFilterArg::Todo => TaskFilter::ToDo,
            TaskFilterArg::Completed => TaskFilter::Completed,
        }
    }
}

/// One line of session input
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand)]
pub enum SessionCommand {
    /// Open a new shift on a task
    Start(TaskIdArgs),
    /// End the open shift on a task
    End(TaskIdArgs),
    /// Mark a task completed, ending any open shift
    Complete(TaskIdArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show a task with its shifts
    Show(ShowTaskArgs),
    /// Show progress counts
    Summary,
    /// Show the transitions applied so far
    History,
    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionLine::try_parse_from(line.split_whitespace())
            .expect("valid session line")
            .command
    }

    #[test]
    fn test_parse_transition_lines() {
        match parse("start 3") {
            SessionCommand::Start(args) => {
                let transition = args.transition(Action::StartShift);
                assert_eq!(transition.id, TaskId::from("3"));
                assert_eq!(transition.action, Action::StartShift);
            }
            _ => panic!("expected start"),
        }
        assert!(matches!(parse("end 3"), SessionCommand::End(_)));
        assert!(matches!(parse("complete 3"), SessionCommand::Complete(_)));
        assert!(matches!(parse("exit"), SessionCommand::Quit));
    }

    #[test]
    fn test_parse_list_filter() {
        match parse("ls --filter todo") {
            SessionCommand::List(args) => {
                let params = ListTasks::from(&args);
                assert_eq!(params.filter, TaskFilter::ToDo);
                assert!(!args.json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_missing_id_is_an_error() {
        assert!(SessionLine::try_parse_from(["start"]).is_err());
        assert!(SessionLine::try_parse_from(["pause", "1"]).is_err());
    }
}
