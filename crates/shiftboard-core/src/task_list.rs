//! Immutable, id-indexed task collection.
//!
//! A [`TaskList`] is one snapshot of the task store. Transition methods never
//! touch `self`; they return a new list in which only the targeted task is
//! replaced. Untouched tasks are shared between snapshots through [`Arc`],
//! the replaced task is a fresh value with its own shift vector, so holding
//! an older snapshot is always safe.

use std::{collections::HashMap, sync::Arc};

use jiff::Timestamp;

use crate::{
    error::{Result, TrackerError},
    models::{Action, Task, TaskFilter, TaskId, TaskSeed, TaskSummary},
    transition,
};

/// Ordered collection of tasks keyed by identifier.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Arc<Task>>,
    // Membership never changes after construction, so the index is shared
    // by every snapshot derived from the same seed.
    index: Arc<HashMap<TaskId, usize>>,
}

impl TaskList {
    /// Builds a list from seed data, preserving seed order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidSeed` for an empty id, a blank title, or
    /// a duplicate id.
    pub fn from_seeds<I>(seeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = TaskSeed>,
    {
        let mut tasks = Vec::new();
        let mut index = HashMap::new();

        for seed in seeds {
            if seed.id.as_str().trim().is_empty() {
                return Err(TrackerError::invalid_seed("task id must not be empty"));
            }
            if seed.title.trim().is_empty() {
                return Err(TrackerError::invalid_seed(format!(
                    "task '{}' has an empty title",
                    seed.id
                )));
            }
            if index.contains_key(&seed.id) {
                return Err(TrackerError::invalid_seed(format!(
                    "duplicate task id '{}'",
                    seed.id
                )));
            }
            index.insert(seed.id.clone(), tasks.len());
            tasks.push(Arc::new(Task::from(seed)));
        }

        Ok(Self {
            tasks,
            index: Arc::new(index),
        })
    }

    /// Looks up a task by identifier.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.index.get(id).map(|&pos| self.tasks[pos].as_ref())
    }

    /// Shared handle to a task, for callers that want to keep it around.
    pub fn get_shared(&self, id: &TaskId) -> Option<Arc<Task>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.tasks[pos]))
    }

    /// Looks up a task, failing with `TrackerError::TaskNotFound`.
    pub fn require(&self, id: &TaskId) -> Result<&Task> {
        self.get(id)
            .ok_or_else(|| TrackerError::TaskNotFound { id: id.clone() })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over tasks in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(task_ref)
    }

    /// Tasks matching `filter`, in seed order.
    pub fn filter(&self, filter: TaskFilter) -> Vec<Task> {
        self.iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// Progress counts over the whole list.
    pub fn summary(&self) -> TaskSummary {
        self.iter().collect()
    }

    /// Applies `action` to task `id` at `now`, returning the new list.
    ///
    /// # Errors
    ///
    /// `TrackerError::TaskNotFound` for an unknown id and
    /// `TrackerError::InvalidTransition` when the action is not legal in the
    /// task's state. On error `self` is, as always, unchanged.
    pub fn apply(&self, id: &TaskId, action: Action, now: Timestamp) -> Result<Self> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| TrackerError::TaskNotFound { id: id.clone() })?;
        let updated = transition::apply(&self.tasks[pos], action, now)?;

        let mut tasks = self.tasks.clone();
        tasks[pos] = Arc::new(updated);

        Ok(Self {
            tasks,
            index: Arc::clone(&self.index),
        })
    }

    /// Opens a new shift on task `id`.
    pub fn start_shift(&self, id: &TaskId, now: Timestamp) -> Result<Self> {
        self.apply(id, Action::StartShift, now)
    }

    /// Ends the open shift on task `id`.
    pub fn end_shift(&self, id: &TaskId, now: Timestamp) -> Result<Self> {
        self.apply(id, Action::EndShift, now)
    }

    /// Completes task `id`, closing any open shift.
    pub fn complete_task(&self, id: &TaskId, now: Timestamp) -> Result<Self> {
        self.apply(id, Action::CompleteTask, now)
    }
}

fn task_ref(task: &Arc<Task>) -> &Task {
    task
}

impl PartialEq for TaskList {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl Eq for TaskList {}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Arc<Task>>, fn(&Arc<Task>) -> &Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter().map(task_ref as fn(&Arc<Task>) -> &Task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskState;

    fn at(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    fn demo_list() -> TaskList {
        TaskList::from_seeds(TaskSeed::demo()).expect("demo seeds are valid")
    }

    fn seed(id: &str, title: &str) -> TaskSeed {
        TaskSeed {
            id: TaskId::from(id),
            title: title.to_string(),
            description: None,
            expected_time: None,
        }
    }

    #[test]
    fn test_from_seeds_preserves_order() {
        let list = demo_list();
        let ids: Vec<&str> = list.iter().map(|task| task.id().as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert!(list.iter().all(|task| task.state() == TaskState::Idle));
    }

    #[test]
    fn test_from_seeds_rejects_duplicates_and_blanks() {
        let duplicate = TaskList::from_seeds(vec![seed("1", "A"), seed("1", "B")]);
        assert!(matches!(duplicate, Err(TrackerError::InvalidSeed { .. })));

        let blank_id = TaskList::from_seeds(vec![seed(" ", "A")]);
        assert!(matches!(blank_id, Err(TrackerError::InvalidSeed { .. })));

        let blank_title = TaskList::from_seeds(vec![seed("1", "  ")]);
        assert!(matches!(blank_title, Err(TrackerError::InvalidSeed { .. })));
    }

    #[test]
    fn test_apply_replaces_only_target() {
        let list = demo_list();
        let id = TaskId::from("2");
        let next = list.start_shift(&id, at("2025-03-01T09:00:00Z")).unwrap();

        assert_eq!(list.get(&id).unwrap().state(), TaskState::Idle);
        assert_eq!(next.get(&id).unwrap().state(), TaskState::ShiftOpen);

        for other in ["1", "3", "4", "5"] {
            let other = TaskId::from(other);
            let before = list.get_shared(&other).unwrap();
            let after = next.get_shared(&other).unwrap();
            assert!(Arc::ptr_eq(&before, &after));
        }
        assert!(!Arc::ptr_eq(
            &list.get_shared(&id).unwrap(),
            &next.get_shared(&id).unwrap()
        ));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let list = demo_list();
        let missing = TaskId::from("42");
        let now = at("2025-03-01T09:00:00Z");

        for action in [Action::StartShift, Action::EndShift, Action::CompleteTask] {
            match list.apply(&missing, action, now) {
                Err(TrackerError::TaskNotFound { id }) => assert_eq!(id, missing),
                other => panic!("expected TaskNotFound, got {other:?}"),
            }
        }
        assert!(matches!(
            list.require(&missing),
            Err(TrackerError::TaskNotFound { .. })
        ));
    }

    #[test]
    fn test_rejected_transition_leaves_list_equal() {
        let list = demo_list();
        let id = TaskId::from("1");
        let now = at("2025-03-01T09:00:00Z");
        let done = list
            .start_shift(&id, now)
            .and_then(|l| l.complete_task(&id, now))
            .unwrap();
        let before = done.clone();

        assert!(done.start_shift(&id, now).is_err());
        assert_eq!(done, before);
    }

    #[test]
    fn test_older_snapshot_is_not_affected_by_later_transitions() {
        let list = demo_list();
        let id = TaskId::from("1");
        let open = list.start_shift(&id, at("2025-03-01T09:00:00Z")).unwrap();
        let closed = open.end_shift(&id, at("2025-03-01T10:00:00Z")).unwrap();

        assert!(open.get(&id).unwrap().shifts()[0].is_open());
        assert!(!closed.get(&id).unwrap().shifts()[0].is_open());
    }

    #[test]
    fn test_filter_and_summary() {
        let now = at("2025-03-01T09:00:00Z");
        let list = demo_list()
            .start_shift(&TaskId::from("1"), now)
            .and_then(|l| l.complete_task(&TaskId::from("1"), now))
            .and_then(|l| l.start_shift(&TaskId::from("2"), now))
            .and_then(|l| l.start_shift(&TaskId::from("3"), now))
            .and_then(|l| l.end_shift(&TaskId::from("3"), now))
            .unwrap();

        assert_eq!(list.filter(TaskFilter::All).len(), 5);
        assert_eq!(list.filter(TaskFilter::ToDo).len(), 4);
        let completed = list.filter(TaskFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id().as_str(), "1");

        let summary = list.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 2);
        assert_eq!(summary.open_shifts, 1);
        assert_eq!(summary.not_started, 2);
    }
}
