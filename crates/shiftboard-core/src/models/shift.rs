//! Shift model definition and related functionality.

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use super::ShiftStatus;

/// One continuous work session against a task.
///
/// Shifts are only built by the transition logic. `start` never changes after
/// creation and `end`, once set, is never earlier than `start`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Shift {
    /// `Shift {n}`, n being the 1-based position at creation
    label: String,

    /// Timestamp when the shift was opened (UTC)
    start: Timestamp,

    /// Timestamp when the shift was closed (UTC); absent while open
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<Timestamp>,
}

impl Shift {
    /// Opens the shift at 1-based `number`.
    pub(crate) fn open(number: usize, start: Timestamp) -> Self {
        Self {
            label: format!("Shift {number}"),
            start,
            end: None,
        }
    }

    /// Returns a copy of this shift closed at `at`, clamped so the end is
    /// never earlier than the start.
    pub(crate) fn closed_at(&self, at: Timestamp) -> Self {
        Self {
            label: self.label.clone(),
            start: self.start,
            end: Some(at.max(self.start)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn status(&self) -> ShiftStatus {
        if self.is_open() {
            ShiftStatus::Open
        } else {
            ShiftStatus::Ended
        }
    }

    /// Length of a closed shift, `None` while the shift is open.
    pub fn duration(&self) -> Option<SignedDuration> {
        self.end.map(|end| end.duration_since(self.start))
    }
}
