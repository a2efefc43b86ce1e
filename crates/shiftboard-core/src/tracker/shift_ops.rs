//! Shift and completion operations for the Tracker.

use log::{debug, warn};

use super::{Tracker, TransitionRecord};
use crate::{
    clock::Clock,
    error::Result,
    models::{Action, Task, TaskId},
    params::Transition,
};

impl<C: Clock> Tracker<C> {
    /// Applies `action` to task `id` and returns the updated task.
    ///
    /// The clock is sampled once; on failure the current snapshot and the
    /// history are left as they were. The history records the instant the
    /// transition wrote, which is later than the clock reading when the clock
    /// stepped back behind the task's last shift timestamp.
    ///
    /// # Errors
    ///
    /// `TrackerError::TaskNotFound` for an unknown id,
    /// `TrackerError::InvalidTransition` when the action is not legal in the
    /// task's current state.
    pub fn apply(&mut self, id: &TaskId, action: Action) -> Result<&Task> {
        let now = self.clock.now();

        match self.tasks.apply(id, action, now) {
            Ok(next) => {
                let at = next
                    .require(id)?
                    .last_activity()
                    .map_or(now, |last| last.max(now));
                debug!("Applied {} to task {id} at {at}", action.as_str());
                self.tasks = next;
                self.history.push(TransitionRecord {
                    task_id: id.clone(),
                    action,
                    at,
                });
                self.tasks.require(id)
            }
            Err(err) => {
                warn!("Rejected {} on task {id}: {err}", action.as_str());
                Err(err)
            }
        }
    }

    /// Applies a transition described by parameters.
    pub fn apply_transition(&mut self, params: &Transition) -> Result<&Task> {
        self.apply(&params.id, params.action)
    }

    /// Opens a new shift on the task.
    pub fn start_shift(&mut self, id: &TaskId) -> Result<&Task> {
        self.apply(id, Action::StartShift)
    }

    /// Ends the task's open shift.
    pub fn end_shift(&mut self, id: &TaskId) -> Result<&Task> {
        self.apply(id, Action::EndShift)
    }

    /// Marks the task completed, closing any open shift at the same instant.
    pub fn complete_task(&mut self, id: &TaskId) -> Result<&Task> {
        self.apply(id, Action::CompleteTask)
    }
}
