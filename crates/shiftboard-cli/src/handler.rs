//! Command handlers shared by one-shot commands and sessions.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use shiftboard_core::{
    params::{Id, ListTasks, Transition},
    Action, Clock, History, OperationStatus, SystemClock, Tracker, TransitionResult,
};

use crate::{
    cli::{ListTasksArgs, SessionCommand, SessionLine, ShowTaskArgs},
    renderer::TerminalRenderer,
};

/// Whether a session keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Binds a tracker to a renderer.
pub struct Cli<C = SystemClock> {
    tracker: Tracker<C>,
    renderer: TerminalRenderer,
    operator: Option<String>,
}

impl<C: Clock> Cli<C> {
    pub fn new(tracker: Tracker<C>, renderer: TerminalRenderer, operator: Option<String>) -> Self {
        Self {
            tracker,
            renderer,
            operator,
        }
    }

    /// Print the task list with a progress footer.
    pub fn list_tasks(&self, args: &ListTasksArgs) -> Result<()> {
        let params = ListTasks::from(args);
        let tasks = self.tracker.list_tasks(&params);

        if args.json {
            let json = serde_json::to_string_pretty(&tasks.0)
                .context("Failed to serialize tasks")?;
            return self.renderer.render_plain(&format!("{json}\n"));
        }

        let mut output = format!("# Tasks ({})\n\n", params.filter);
        if let Some(operator) = &self.operator {
            output.push_str(&format!("Welcome, {operator}!\n\n"));
        }
        output.push_str(&tasks.to_string());
        output.push('\n');
        output.push_str(&self.tracker.summary().to_string());

        self.renderer.render(&output)
    }

    /// Print one task with its shift tracker.
    pub fn show_task(&self, args: &ShowTaskArgs) -> Result<()> {
        let params = Id::from(args);
        let task = self
            .tracker
            .get_task(&params.id)
            .with_context(|| format!("Failed to show task {}", params.id))?;

        if args.json {
            let json =
                serde_json::to_string_pretty(task).context("Failed to serialize task")?;
            self.renderer.render_plain(&format!("{json}\n"))
        } else {
            self.renderer.render(&task.to_string())
        }
    }

    /// Apply a transition and print the outcome.
    ///
    /// Rejected transitions are reported, not returned: a session keeps going
    /// after an illegal action.
    pub fn apply_transition(&mut self, params: &Transition) -> Result<()> {
        match self.tracker.apply_transition(params) {
            Ok(task) => self
                .renderer
                .render(&TransitionResult::new(params.action, task).to_string()),
            Err(err) => self
                .renderer
                .render(&OperationStatus::from_error(&err).to_string()),
        }
    }

    /// Read commands from `input` until end of input or `quit`.
    ///
    /// Blank lines and lines starting with `#` are skipped. A summary is
    /// printed when the session ends.
    pub fn run_session<R: BufRead>(&mut self, mut input: R, interactive: bool) -> Result<()> {
        let mut line = String::new();

        loop {
            if interactive {
                self.renderer.prompt()?;
            }

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read session input")?;
            if read == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            debug!("Session command: {trimmed}");
            match SessionLine::try_parse_from(trimmed.split_whitespace()) {
                Ok(SessionLine { command }) => {
                    if self.handle_session_command(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => self.renderer.render_plain(&err.render().to_string())?,
            }
        }

        self.renderer.render(&self.tracker.summary().to_string())
    }

    fn handle_session_command(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Start(args) => {
                self.apply_transition(&args.transition(Action::StartShift))?
            }
            SessionCommand::End(args) => self.apply_transition(&args.transition(Action::EndShift))?,
            SessionCommand::Complete(args) => {
                self.apply_transition(&args.transition(Action::CompleteTask))?
            }
            SessionCommand::List(args) => self.list_tasks(&args)?,
            SessionCommand::Show(args) => {
                // Unknown ids are reported like rejected transitions
                let id = Id::from(&args).id;
                match self.tracker.get_task(&id) {
                    Ok(_) => self.show_task(&args)?,
                    Err(err) => self
                        .renderer
                        .render(&OperationStatus::from_error(&err).to_string())?,
                }
            }
            SessionCommand::Summary => self.renderer.render(&self.tracker.summary().to_string())?,
            SessionCommand::History => self
                .renderer
                .render(&History(self.tracker.history()).to_string())?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
