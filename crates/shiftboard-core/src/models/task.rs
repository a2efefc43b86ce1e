//! Task model definition and related functionality.

use jiff::{SignedDuration, Timestamp};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::{Shift, TaskId, TaskSeed, TaskState};

/// A unit of work tracked through its shifts.
///
/// Fields are private so the only way to change a task is through the
/// transition functions in [`crate::transition`], which keep the shift list
/// and completion flag consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    id: TaskId,

    /// Title of the task
    title: String,

    /// Longer description of the work
    description: Option<String>,

    /// Free-form expected duration label (e.g. "1.5h"), never parsed
    expected_time: Option<String>,

    /// Set once the task has been completed
    completed: bool,

    /// Shifts in chronological order; append-only
    shifts: Vec<Shift>,
}

impl Task {
    /// Creates a task that has not been started.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            expected_time: None,
            completed: false,
            shifts: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the expected time label.
    pub fn with_expected_time(mut self, expected_time: impl Into<String>) -> Self {
        self.expected_time = Some(expected_time.into());
        self
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expected_time(&self) -> Option<&str> {
        self.expected_time.as_deref()
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True once at least one shift has been opened.
    pub fn is_started(&self) -> bool {
        !self.shifts.is_empty()
    }

    /// The currently open shift, if any. Only the last shift can be open.
    pub fn open_shift(&self) -> Option<&Shift> {
        self.shifts.last().filter(|shift| shift.is_open())
    }

    /// Derives the lifecycle state from the shift list and completion flag.
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Done
        } else {
            match self.shifts.last() {
                None => TaskState::Idle,
                Some(shift) if shift.is_open() => TaskState::ShiftOpen,
                Some(_) => TaskState::ShiftClosed,
            }
        }
    }

    /// Latest timestamp written to the shift list: the last shift's end, or
    /// its start while it is open.
    pub fn last_activity(&self) -> Option<Timestamp> {
        self.shifts
            .last()
            .map(|shift| shift.end().unwrap_or_else(|| shift.start()))
    }

    /// Total length of all closed shifts.
    pub fn worked_time(&self) -> SignedDuration {
        self.shifts
            .iter()
            .filter_map(Shift::duration)
            .fold(SignedDuration::ZERO, |total, duration| total + duration)
    }

    /// Copy of this task with a new shift opened at `now`.
    ///
    /// The start is clamped to the end of the previous shift so shift order
    /// stays chronological.
    pub(crate) fn with_opened_shift(&self, now: Timestamp) -> Self {
        let start = match self.shifts.last().and_then(Shift::end) {
            Some(previous_end) => now.max(previous_end),
            None => now,
        };
        let mut next = self.clone();
        next.shifts.push(Shift::open(self.shifts.len() + 1, start));
        next
    }

    /// Copy of this task with its last shift closed at `now`.
    pub(crate) fn with_closed_shift(&self, now: Timestamp) -> Self {
        let mut next = self.clone();
        if let Some(last) = next.shifts.last_mut() {
            if last.is_open() {
                *last = last.closed_at(now);
            }
        }
        next
    }

    /// Copy of this task marked completed.
    pub(crate) fn with_completed(&self) -> Self {
        let mut next = self.clone();
        next.completed = true;
        next
    }
}

/// Serializes the stored fields plus the derived `started` flag.
impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Task", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("expected_time", &self.expected_time)?;
        state.serialize_field("completed", &self.completed)?;
        state.serialize_field("started", &self.is_started())?;
        state.serialize_field("shifts", &self.shifts)?;
        state.end()
    }
}

impl From<TaskSeed> for Task {
    fn from(seed: TaskSeed) -> Self {
        Self {
            id: seed.id,
            title: seed.title,
            description: seed.description,
            expected_time: seed.expected_time,
            completed: false,
            shifts: Vec::new(),
        }
    }
}
