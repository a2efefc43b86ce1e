//! Display implementations for domain models.
//!
//! All output is markdown: a task renders as a detail page with its shift
//! tracker, a shift renders as one tracker entry.

use std::fmt;

use super::datetime::{LocalDateTime, WorkedTime};
use crate::models::{Action, Shift, ShiftStatus, Task, TaskFilter, TaskState, TaskSummary};

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id(), self.title())?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.state().with_icon())?;
        writeln!(f, "- Expected Time: {}", self.expected_time().unwrap_or("N/A"))?;
        if self.is_started() {
            writeln!(f, "- Worked: {}", WorkedTime(self.worked_time()))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}",
            self.description().unwrap_or("No description available.")
        )?;

        if self.shifts().is_empty() {
            writeln!(f, "\nNo shifts recorded.")?;
        } else {
            writeln!(f, "\n## Shifts")?;
            writeln!(f)?;
            for shift in self.shifts() {
                write!(f, "{shift}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.label(), self.status().with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Start: {}", LocalDateTime(&self.start()))?;
        if let (Some(end), Some(duration)) = (self.end(), self.duration()) {
            writeln!(f, "- End: {}", LocalDateTime(&end))?;
            writeln!(f, "- Duration: {}", WorkedTime(duration))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed {} of {} tasks ({} in progress, {} not started)",
            self.completed, self.total, self.in_progress, self.not_started
        )
    }
}
