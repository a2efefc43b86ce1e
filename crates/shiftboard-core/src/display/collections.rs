//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{models::Task, tracker::TransitionRecord};

/// Newtype wrapper for displaying a task list.
///
/// Each task renders as one checklist line with its status; empty
/// collections render a placeholder.
///
/// # Examples
///
/// ```rust
/// use shiftboard_core::{display::Tasks, models::Task};
///
/// let tasks = Tasks(vec![Task::new("1", "Task 1").with_expected_time("1h")]);
/// let output = format!("{}", tasks);
/// assert_eq!(output, "- [ ] 1. Task 1 (○ Not Started, 1h)\n");
///
/// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        for task in &self.0 {
            let check = if task.is_completed() { "x" } else { " " };
            write!(
                f,
                "- [{check}] {}. {} ({}",
                task.id(),
                task.title(),
                task.state().with_icon()
            )?;
            if let Some(expected) = task.expected_time() {
                write!(f, ", {expected}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the transition history, oldest first.
pub struct History<'a>(pub &'a [TransitionRecord]);

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No transitions recorded.");
        }

        for record in self.0 {
            writeln!(
                f,
                "- {}: {} on task {}",
                LocalDateTime(&record.at),
                record.action,
                record.task_id
            )?;
        }
        Ok(())
    }
}
