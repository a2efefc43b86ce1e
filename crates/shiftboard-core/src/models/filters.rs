//! Filter types for querying tasks.

use super::Task;

/// Task list filter, matching the tabs of the home list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task
    #[default]
    All,

    /// Tasks not yet completed, started or not
    ToDo,

    /// Completed tasks only
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::ToDo => !task.is_completed(),
            TaskFilter::Completed => task.is_completed(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::ToDo => "todo",
            TaskFilter::Completed => "completed",
        }
    }
}

impl From<&crate::params::ListTasks> for TaskFilter {
    fn from(params: &crate::params::ListTasks) -> Self {
        params.filter
    }
}
