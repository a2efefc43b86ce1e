//! State and action enumerations for tasks and shifts.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task, derived from its shifts and completion flag.
///
/// ```text
/// Idle ──start──▶ ShiftOpen ──end──▶ ShiftClosed ──complete──▶ Done
///                  │    ▲                │
///                  │    └─────start──────┘
///                  └──────────complete──────────────────────▶ Done
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// No shift has been opened yet
    Idle,

    /// The latest shift has no end
    ShiftOpen,

    /// The latest shift has ended and the task is not completed
    ShiftClosed,

    /// The task is completed; terminal
    Done,
}

impl TaskState {
    /// Phrase used when reporting a rejected transition.
    pub fn describe(&self) -> &'static str {
        match self {
            TaskState::Idle => "not started",
            TaskState::ShiftOpen => "on an open shift",
            TaskState::ShiftClosed => "between shifts",
            TaskState::Done => "already completed",
        }
    }

    /// Operator-facing status label.
    ///
    /// Both shift states collapse to `In Progress`; the shift tracker shows
    /// whether a shift is currently running.
    pub fn label(&self) -> &'static str {
        match self {
            TaskState::Idle => "Not Started",
            TaskState::ShiftOpen | TaskState::ShiftClosed => "In Progress",
            TaskState::Done => "Completed",
        }
    }

    /// Get the status label with an icon for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiftboard_core::models::TaskState;
    ///
    /// assert_eq!(TaskState::Done.with_icon(), "✓ Completed");
    /// assert_eq!(TaskState::ShiftOpen.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskState::ShiftClosed.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskState::Idle.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskState::Idle => "○ Not Started",
            TaskState::ShiftOpen | TaskState::ShiftClosed => "➤ In Progress",
            TaskState::Done => "✓ Completed",
        }
    }
}

/// An intent issued against a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open a new shift
    StartShift,

    /// Close the open shift
    EndShift,

    /// Mark the task completed, closing any open shift
    CompleteTask,
}

impl Action {
    /// Machine-readable name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::StartShift => "start_shift",
            Action::EndShift => "end_shift",
            Action::CompleteTask => "complete_task",
        }
    }

    /// Human-readable verb phrase.
    pub fn verb(&self) -> &'static str {
        match self {
            Action::StartShift => "start shift",
            Action::EndShift => "end shift",
            Action::CompleteTask => "complete task",
        }
    }
}

/// Status of a single shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    /// Shift is running
    Open,

    /// Shift has an end timestamp
    Ended,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Open => "open",
            ShiftStatus::Ended => "ended",
        }
    }

    pub fn with_icon(&self) -> &'static str {
        match self {
            ShiftStatus::Open => "➤ Open",
            ShiftStatus::Ended => "✓ Ended",
        }
    }
}
