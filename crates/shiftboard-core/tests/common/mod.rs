use jiff::Timestamp;
use shiftboard_core::{ManualClock, Tracker, TrackerBuilder};

/// Parses an RFC 3339 timestamp.
pub fn at(s: &str) -> Timestamp {
    s.parse().expect("Failed to parse timestamp")
}

/// Helper function to create a demo tracker driven by a manual clock
pub fn create_test_tracker(clock: &ManualClock) -> Tracker<&ManualClock> {
    TrackerBuilder::new()
        .with_demo_tasks()
        .with_clock(clock)
        .build()
        .expect("Failed to create tracker")
}
