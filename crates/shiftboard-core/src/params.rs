//! Parameter structures for shiftboard operations.
//!
//! These structures carry no interface-specific derives so the CLI (or any
//! other front end) can wrap them with its own argument types and convert
//! with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Tracker      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use crate::models::{Action, TaskFilter, TaskId};

/// Parameters for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListTasks {
    pub filter: TaskFilter,
}

/// Parameters for operations that address a single task.
#[derive(Debug, Clone)]
pub struct Id {
    pub id: TaskId,
}

/// Parameters for applying an action to a task.
#[derive(Debug, Clone)]
pub struct Transition {
    pub id: TaskId,
    pub action: Action,
}
