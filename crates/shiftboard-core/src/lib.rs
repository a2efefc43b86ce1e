//! Core library for the Shiftboard task tracker.
//!
//! Operators work through a list of tasks by opening and closing shifts
//! against them and finally marking them completed. This crate holds the
//! state machine behind that flow and everything around it except the
//! front end: models, the pure transition logic, the snapshot-based task
//! list, the tracker that owns the current snapshot, and markdown display.
//!
//! State lives in memory only. A tracker is seeded once (from a JSON seed
//! file or the built-in demo tasks) and discarded with the process.
//!
//! # Quick Start
//!
//! ```rust
//! use shiftboard_core::{params::ListTasks, TaskFilter, TaskId, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new().with_demo_tasks().build()?;
//!
//! let id = TaskId::from("2");
//! tracker.start_shift(&id)?;
//! let task = tracker.complete_task(&id)?;
//! println!("{}", task);
//!
//! let done = tracker.list_tasks(&ListTasks {
//!     filter: TaskFilter::Completed,
//! });
//! assert_eq!(done.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod task_list;
pub mod tracker;
pub mod transition;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{History, OperationStatus, Tasks, TransitionResult};
pub use error::{Result, TrackerError};
pub use models::{
    Action, Shift, ShiftStatus, Task, TaskFilter, TaskId, TaskSeed, TaskState, TaskSummary,
};
pub use params::{Id, ListTasks, Transition};
pub use task_list::TaskList;
pub use tracker::{Tracker, TrackerBuilder, TransitionRecord};
