//! Tests for the tracker module.

use std::io::Write;

use jiff::{SignedDuration, Timestamp};
use tempfile::NamedTempFile;

use super::*;
use crate::{
    clock::ManualClock,
    error::TrackerError,
    models::{TaskFilter, TaskSeed, TaskState},
    params::Transition,
};

fn start_time() -> Timestamp {
    "2025-03-01T09:00:00Z".parse().expect("valid timestamp")
}

/// Helper function to create a demo tracker driven by `clock`
fn create_test_tracker(clock: &ManualClock) -> Tracker<&ManualClock> {
    TrackerBuilder::new()
        .with_demo_tasks()
        .with_clock(clock)
        .build()
        .expect("Failed to create tracker")
}

#[test]
fn test_full_workflow_records_history() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("1");

    tracker.start_shift(&id).expect("start");
    clock.advance(SignedDuration::from_hours(2));
    tracker.end_shift(&id).expect("end");
    clock.advance(SignedDuration::from_mins(30));
    let task = tracker.complete_task(&id).expect("complete");

    assert_eq!(task.state(), TaskState::Done);
    assert_eq!(task.shifts()[0].start(), start_time());
    assert_eq!(
        task.shifts()[0].end(),
        Some(start_time() + SignedDuration::from_hours(2))
    );
    assert_eq!(task.worked_time(), SignedDuration::from_hours(2));

    let actions: Vec<Action> = tracker.history().iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        [Action::StartShift, Action::EndShift, Action::CompleteTask]
    );
    assert_eq!(
        tracker.history()[2].at,
        start_time() + SignedDuration::from_mins(150)
    );
}

#[test]
fn test_complete_uses_one_instant_for_shift_end() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("2");

    tracker.start_shift(&id).unwrap();
    clock.advance(SignedDuration::from_mins(45));
    let task_end = tracker.complete_task(&id).unwrap().shifts()[0].end();

    let completed_at = tracker.history().last().unwrap().at;
    assert_eq!(task_end, Some(completed_at));
    assert_eq!(completed_at, start_time() + SignedDuration::from_mins(45));
}

#[test]
fn test_history_matches_clamped_shift_times_after_clock_steps_back() {
    let clock = ManualClock::new(start_time() + SignedDuration::from_hours(1));
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("1");

    tracker.start_shift(&id).unwrap();
    clock.advance(SignedDuration::from_hours(1));
    tracker.end_shift(&id).unwrap();

    clock.set(start_time());
    let second_start = tracker.start_shift(&id).unwrap().shifts()[1].start();
    assert_eq!(second_start, start_time() + SignedDuration::from_hours(2));
    assert_eq!(tracker.history()[2].at, second_start);

    clock.set(start_time());
    let second_end = tracker.end_shift(&id).unwrap().shifts()[1].end();
    assert_eq!(second_end, Some(second_start));
    assert_eq!(Some(tracker.history()[3].at), second_end);

    let completed_at = {
        tracker.complete_task(&id).unwrap();
        tracker.history()[4].at
    };
    assert_eq!(completed_at, second_start);

    let times: Vec<Timestamp> = tracker.history().iter().map(|r| r.at).collect();
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_rejection_keeps_snapshot_and_history() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("3");
    tracker.start_shift(&id).unwrap();
    let before = tracker.snapshot();

    let err = tracker.start_shift(&id).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidTransition {
            state: TaskState::ShiftOpen,
            action: Action::StartShift,
            ..
        }
    ));
    assert_eq!(tracker.tasks(), &before);
    assert_eq!(tracker.history().len(), 1);
}

#[test]
fn test_unknown_task_is_not_found() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let missing = TaskId::from("99");

    assert!(matches!(
        tracker.start_shift(&missing),
        Err(TrackerError::TaskNotFound { .. })
    ));
    assert!(matches!(
        tracker.get_task(&missing),
        Err(TrackerError::TaskNotFound { .. })
    ));
    assert!(tracker.history().is_empty());
}

#[test]
fn test_snapshot_is_isolated_from_later_operations() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("4");

    let before = tracker.snapshot();
    tracker.start_shift(&id).unwrap();

    assert_eq!(before.get(&id).unwrap().state(), TaskState::Idle);
    assert_eq!(tracker.get_task(&id).unwrap().state(), TaskState::ShiftOpen);
}

#[test]
fn test_apply_transition_params() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let params = Transition {
        id: TaskId::from("5"),
        action: Action::StartShift,
    };

    let task = tracker.apply_transition(&params).unwrap();
    assert_eq!(task.shifts()[0].label(), "Shift 1");
}

#[test]
fn test_at_most_one_open_shift_after_any_sequence() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let ids: Vec<TaskId> = ["1", "2", "3"].into_iter().map(TaskId::from).collect();
    let actions = [
        Action::StartShift,
        Action::StartShift,
        Action::EndShift,
        Action::CompleteTask,
        Action::StartShift,
        Action::EndShift,
        Action::EndShift,
    ];

    for (step, action) in actions.iter().cycle().take(40).enumerate() {
        clock.advance(SignedDuration::from_mins(7));
        let id = &ids[step % ids.len()];
        let _ = tracker.apply(id, *action);

        for task in tracker.tasks() {
            let open = task.shifts().iter().filter(|s| s.is_open()).count();
            assert!(open <= 1, "task {} has {open} open shifts", task.id());
            if task.is_completed() {
                assert!(task.is_started());
                assert_eq!(open, 0);
            }
            for shift in task.shifts() {
                if let Some(end) = shift.end() {
                    assert!(end >= shift.start());
                }
            }
        }
    }
}

#[test]
fn test_list_tasks_and_summary() {
    let clock = ManualClock::new(start_time());
    let mut tracker = create_test_tracker(&clock);
    let id = TaskId::from("1");
    tracker.start_shift(&id).unwrap();
    tracker.complete_task(&id).unwrap();

    let todo = tracker.list_tasks(&ListTasks {
        filter: TaskFilter::ToDo,
    });
    assert_eq!(todo.len(), 4);

    let completed = tracker.list_tasks(&ListTasks {
        filter: TaskFilter::Completed,
    });
    assert_eq!(completed.len(), 1);
    assert_eq!(completed.0[0].title(), "Task 1");

    let summary = tracker.summary();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.not_started, 4);
}

#[test]
fn test_builder_reads_seed_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"[
            {{"id": "a-1", "title": "Calibrate sensors", "expected_time": "45m"}},
            {{"id": "a-2", "title": "Replace filters", "description": "Line 2"}}
        ]"#
    )
    .unwrap();

    let tracker = TrackerBuilder::new()
        .with_seed_path(Some(file.path()))
        .build()
        .expect("Failed to build tracker");

    assert_eq!(tracker.tasks().len(), 2);
    let task = tracker.get_task(&TaskId::from("a-1")).unwrap();
    assert_eq!(task.title(), "Calibrate sensors");
    assert_eq!(task.expected_time(), Some("45m"));
    assert_eq!(task.description(), None);
}

#[test]
fn test_builder_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let result = TrackerBuilder::new().with_seed_path(Some(&missing)).build();
    assert!(matches!(result, Err(TrackerError::FileSystem { .. })));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let result = TrackerBuilder::new()
        .with_seed_path(Some(file.path()))
        .build();
    assert!(matches!(result, Err(TrackerError::Serialization { .. })));
}

#[test]
fn test_builder_rejects_duplicate_seeds() {
    let seed = TaskSeed {
        id: TaskId::from("x"),
        title: "Twice".to_string(),
        description: None,
        expected_time: None,
    };
    let result = TrackerBuilder::new()
        .with_seeds(vec![seed.clone(), seed])
        .build();
    assert!(matches!(result, Err(TrackerError::InvalidSeed { .. })));
}
