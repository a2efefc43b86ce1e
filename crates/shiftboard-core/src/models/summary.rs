//! Task list summary types.

use serde::Serialize;

use super::{Task, TaskState};

/// Progress counts over a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Total number of tasks
    pub total: u32,
    /// Tasks not yet started
    pub not_started: u32,
    /// Tasks started but not completed
    pub in_progress: u32,
    /// Completed tasks
    pub completed: u32,
    /// Tasks with a shift currently running
    pub open_shifts: u32,
}

impl<'a> FromIterator<&'a Task> for TaskSummary {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TaskSummary::default(), |mut summary, task| {
                summary.total += 1;
                match task.state() {
                    TaskState::Idle => summary.not_started += 1,
                    TaskState::ShiftOpen => {
                        summary.in_progress += 1;
                        summary.open_shifts += 1;
                    }
                    TaskState::ShiftClosed => summary.in_progress += 1,
                    TaskState::Done => summary.completed += 1,
                }
                summary
            })
    }
}
