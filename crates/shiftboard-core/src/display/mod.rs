//! Display formatting for tasks, shifts, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers cover collections and operation outcomes. Everything
//! renders as markdown so the CLI can pass it through its terminal renderer
//! or print it as plain text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Tasks, History)
//! - [`results`]: Transition outcome wrapper (TransitionResult)
//! - [`status`]: One-line status messages (OperationStatus)
//! - [`datetime`]: Timestamp and duration formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{History, Tasks};
pub use datetime::{LocalDateTime, WorkedTime};
pub use results::TransitionResult;
pub use status::OperationStatus;
