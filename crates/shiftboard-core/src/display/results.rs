//! Result wrapper types for displaying transition outcomes.

use std::fmt;

use crate::models::{Action, Task};

/// Wrapper type for displaying the task produced by a transition.
///
/// The headline names what happened, followed by the full task.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use shiftboard_core::{
///     display::TransitionResult,
///     models::{Action, Task},
///     transition,
/// };
///
/// let now: Timestamp = "2025-03-01T09:00:00Z".parse().unwrap();
/// let task = transition::start_shift(&Task::new("2", "Task 2"), now).unwrap();
///
/// let output = TransitionResult::new(Action::StartShift, &task).to_string();
/// assert!(output.starts_with("Started Shift 1 on task 2\n"));
/// ```
pub struct TransitionResult<'a> {
    pub action: Action,
    pub task: &'a Task,
}

impl<'a> TransitionResult<'a> {
    pub fn new(action: Action, task: &'a Task) -> Self {
        Self { action, task }
    }
}

impl fmt::Display for TransitionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.task.id();
        let label = self
            .task
            .shifts()
            .last()
            .map_or("shift", |shift| shift.label());

        match self.action {
            Action::StartShift => writeln!(f, "Started {label} on task {id}")?,
            Action::EndShift => writeln!(f, "Ended {label} on task {id}")?,
            Action::CompleteTask => writeln!(f, "Completed task {id}")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.task)
    }
}
