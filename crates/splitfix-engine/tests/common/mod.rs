#![allow(dead_code)]

use chrono::TimeDelta;
use splitfix_types::{Attempt, AttemptIndex, IndexedTime, Run, Segment, Time};

pub fn secs(n: i64) -> TimeDelta {
    TimeDelta::seconds(n)
}

/// Time with only the real-time component set.
pub fn real(n: i64) -> Time {
    Time::from_real_time(secs(n))
}

/// Time with both components set.
pub fn both(real: i64, game: i64) -> Time {
    Time::new(Some(secs(real)), Some(secs(game)))
}

pub fn sample(time: Time, raw: i32) -> IndexedTime {
    IndexedTime::new(time, AttemptIndex::from_raw(raw))
}

/// Run with one segment per (personal-best split, best segment time) pair.
pub fn run_with_segments(segments: &[(Time, Time)]) -> Run {
    let mut run = Run::new();
    for (i, &(split, best)) in segments.iter().enumerate() {
        run.add_segment(format!("Split {}", i + 1), split, best);
    }
    run
}

/// Mark `count` attempts as recorded without attaching times.
pub fn record_attempts(run: &mut Run, count: i32) {
    for index in 1..=count {
        run.attempt_history.push(Attempt::new(index, Time::default()));
    }
}
