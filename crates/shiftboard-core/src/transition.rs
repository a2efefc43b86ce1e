//! Shift transition logic.
//!
//! Pure functions computing the next value of a [`Task`] for an [`Action`]
//! taken at a given instant. Nothing here mutates its input or reads the
//! clock; the caller samples "now" once and passes it in, so every timestamp
//! set by one operation is the same instant.
//!
//! | From        | Action       | To          | Effect                          |
//! |-------------|--------------|-------------|---------------------------------|
//! | Idle        | StartShift   | ShiftOpen   | append `Shift {n}`              |
//! | ShiftClosed | StartShift   | ShiftOpen   | append `Shift {n}`              |
//! | ShiftOpen   | EndShift     | ShiftClosed | close the last shift            |
//! | ShiftClosed | CompleteTask | Done        | mark completed                  |
//! | ShiftOpen   | CompleteTask | Done        | close the last shift and mark completed |
//!
//! Every other pair is rejected with
//! [`TrackerError::InvalidTransition`].

use jiff::Timestamp;

use crate::{
    error::{Result, TrackerError},
    models::{Action, Task, TaskState},
};

/// Applies `action` to `task` at `now`.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use shiftboard_core::{
///     models::{Action, Task, TaskState},
///     transition,
/// };
///
/// let now: Timestamp = "2025-03-01T09:00:00Z".parse().unwrap();
/// let task = Task::new("1", "Task 1");
///
/// let started = transition::apply(&task, Action::StartShift, now).unwrap();
/// assert_eq!(started.state(), TaskState::ShiftOpen);
/// assert_eq!(started.shifts()[0].label(), "Shift 1");
///
/// // The input is left untouched
/// assert_eq!(task.state(), TaskState::Idle);
/// ```
pub fn apply(task: &Task, action: Action, now: Timestamp) -> Result<Task> {
    match (task.state(), action) {
        (TaskState::Idle | TaskState::ShiftClosed, Action::StartShift) => {
            Ok(task.with_opened_shift(now))
        }
        (TaskState::ShiftOpen, Action::EndShift) => Ok(task.with_closed_shift(now)),
        (TaskState::ShiftOpen, Action::CompleteTask) => {
            Ok(task.with_closed_shift(now).with_completed())
        }
        (TaskState::ShiftClosed, Action::CompleteTask) => Ok(task.with_completed()),
        (state, action) => Err(TrackerError::InvalidTransition {
            id: task.id().clone(),
            state,
            action,
        }),
    }
}

/// Opens a new shift. Rejected while a shift is open or once completed.
pub fn start_shift(task: &Task, now: Timestamp) -> Result<Task> {
    apply(task, Action::StartShift, now)
}

/// Closes the open shift. Rejected when no shift is open.
pub fn end_shift(task: &Task, now: Timestamp) -> Result<Task> {
    apply(task, Action::EndShift, now)
}

/// Completes the task, closing an open shift in the same update. Rejected
/// for tasks never started or already completed.
pub fn complete_task(task: &Task, now: Timestamp) -> Result<Task> {
    apply(task, Action::CompleteTask, now)
}
