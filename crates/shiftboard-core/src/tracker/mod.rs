//! High-level tracker API for working through tasks.
//!
//! The [`Tracker`] owns the current [`TaskList`] snapshot and is the single
//! place that reads the clock. Each operation samples "now" once, hands it to
//! the pure transition logic, and swaps the resulting snapshot in.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Tracker     │    │    TaskList     │    │   transition    │
//! │ (clock, history)│───▶│ (replace-on-    │───▶│ (pure state     │
//! │                 │    │  write snapshot)│    │  machine)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances from seed data
//! - [`shift_ops`]: Shift and completion operations
//!
//! # Usage Examples
//!
//! ```rust
//! use shiftboard_core::{TaskId, TaskState, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new().with_demo_tasks().build()?;
//! let id = TaskId::from("1");
//!
//! tracker.start_shift(&id)?;
//! tracker.end_shift(&id)?;
//! let task = tracker.complete_task(&id)?;
//! assert_eq!(task.state(), TaskState::Done);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    clock::{Clock, SystemClock},
    display::Tasks,
    error::Result,
    models::{Action, Task, TaskId, TaskSummary},
    params::ListTasks,
    task_list::TaskList,
};

pub mod builder;
pub mod shift_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// One successfully applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    pub task_id: TaskId,
    pub action: Action,
    pub at: Timestamp,
}

/// Owner of the current task snapshot.
pub struct Tracker<C = SystemClock> {
    pub(crate) tasks: TaskList,
    pub(crate) clock: C,
    pub(crate) history: Vec<TransitionRecord>,
}

impl<C: Clock> Tracker<C> {
    /// Creates a tracker over an existing task list.
    pub fn new(tasks: TaskList, clock: C) -> Self {
        Self {
            tasks,
            clock,
            history: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// A copy of the current snapshot that later operations will not affect.
    pub fn snapshot(&self) -> TaskList {
        self.tasks.clone()
    }

    /// Looks up a task in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TaskNotFound` for an unknown id.
    pub fn get_task(&self, id: &TaskId) -> Result<&Task> {
        self.tasks.require(id)
    }

    /// Tasks matching the list parameters, in seed order.
    pub fn list_tasks(&self, params: &ListTasks) -> Tasks {
        Tasks(self.tasks.filter(params.into()))
    }

    /// Progress counts over all tasks.
    pub fn summary(&self) -> TaskSummary {
        self.tasks.summary()
    }

    /// Applied transitions, oldest first.
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }
}
