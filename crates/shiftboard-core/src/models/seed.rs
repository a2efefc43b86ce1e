//! Seed data for building a task list.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// Creation data for one task, as read from a seed file.
///
/// Seeds carry no progress: every task starts out not started, with no
/// shifts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSeed {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expected_time: Option<String>,
}

impl TaskSeed {
    /// The built-in task set used when no seed file is configured.
    pub fn demo() -> Vec<TaskSeed> {
        [
            ("1", "Task 1", "Complete the form verification module", "1h"),
            ("2", "Task 2", "Check device connectivity and debug hardware", "2h"),
            ("3", "Task 3", "Update firmware to latest version", "3h"),
            ("4", "Task 4", "Write documentation for the project", "1.5h"),
            ("5", "Task 5", "Prepare presentation for client meeting", "2h"),
        ]
        .into_iter()
        .map(|(id, title, description, expected_time)| TaskSeed {
            id: TaskId::from(id),
            title: title.to_string(),
            description: Some(description.to_string()),
            expected_time: Some(expected_time.to_string()),
        })
        .collect()
    }
}
