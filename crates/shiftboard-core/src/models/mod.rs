//! Data models for tasks and shifts.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures apart from presentation.
//!
//! # Model Overview
//!
//! - [`Task`]: a unit of work with an append-only list of [`Shift`]s and a
//!   completion flag. Its [`TaskState`] is derived, never stored.
//! - [`Shift`]: one work session with a start and an optional end.
//! - [`Action`]: the three intents a caller can issue against a task.
//! - [`TaskSeed`]: creation data for a task, read from seed files.
//! - [`TaskFilter`] and [`TaskSummary`]: list views.
//!
//! # Examples
//!
//! ```rust
//! use shiftboard_core::models::{Task, TaskState};
//!
//! let task = Task::new("1", "Task 1")
//!     .with_description("Complete the form verification module")
//!     .with_expected_time("1h");
//!
//! assert_eq!(task.state(), TaskState::Idle);
//! assert!(!task.is_started());
//! assert!(task.shifts().is_empty());
//! ```

pub mod filters;
pub mod id;
pub mod seed;
pub mod shift;
pub mod status;
pub mod summary;
pub mod task;


pub use filters::TaskFilter;
pub use id::TaskId;
pub use seed::TaskSeed;
pub use shift::Shift;
pub use status::{Action, ShiftStatus, TaskState};
pub use summary::TaskSummary;
pub use task::Task;
