use chrono::TimeDelta;
use splitfix_types::{AttemptIndex, IndexedTime, Run, Time};

use crate::history::min_history_index;

/// Running state of the scan over personal-best splits: cumulative totals
/// per method plus the carry flag marking a broken cumulative chain.
#[derive(Debug, Clone, Copy)]
struct ScanState {
    prev_real: TimeDelta,
    prev_game: TimeDelta,
    carry: bool,
}

impl ScanState {
    fn start() -> Self {
        Self {
            prev_real: TimeDelta::zero(),
            prev_game: TimeDelta::zero(),
            carry: false,
        }
    }
}

/// One step of the scan.
///
/// The synthesis decision reads the carry flag set by the *previous*
/// segment; the flag computed here only affects the *next* one. A split
/// missing either component both synthesizes a sample itself and carries
/// the break forward, since the cumulative chain is broken at this point.
fn scan_step(state: ScanState, split: Time) -> (ScanState, Option<Time>) {
    let sample = if split.real_time.is_none() || split.game_time.is_none() || state.carry {
        Some(Time::new(
            split.real_time.map(|t| t - state.prev_real),
            split.game_time.map(|t| t - state.prev_game),
        ))
    } else {
        None
    };

    let next = ScanState {
        prev_real: split.real_time.unwrap_or(state.prev_real),
        prev_game: split.game_time.unwrap_or(state.prev_game),
        carry: split.real_time.is_none() || split.game_time.is_none(),
    };
    (next, sample)
}

/// Fabricate one history sample per segment from the personal-best trace.
///
/// Every segment at or immediately downstream of a break in the cumulative
/// chain receives a synthetic sample holding its personal-best duration;
/// segments with fully-known, contiguous splits do not. All samples share
/// one index one below the run's minimum history index.
pub fn synthesize_history_from_personal_best(run: &mut Run) {
    let index = AttemptIndex::from_raw(min_history_index(run) - 1);
    let mut state = ScanState::start();
    for segment in &mut run.segments {
        let (next, sample) = scan_step(state, segment.personal_best_split_time);
        if let Some(time) = sample {
            segment.history.push(IndexedTime::new(time, index));
        }
        state = next;
    }
}

/// Append a segment's best segment time as a synthetic history sample.
///
/// No-op when the segment index is out of range or the best time has no
/// measurement in either method.
pub fn synthesize_best_segment_sample(run: &mut Run, segment_index: usize) {
    let index = AttemptIndex::from_raw(min_history_index(run) - 1);
    let Some(segment) = run.segments.get_mut(segment_index) else {
        return;
    };
    if !segment.best_segment_time.is_empty() {
        let best = segment.best_segment_time;
        segment.history.push(IndexedTime::new(best, index));
    }
}
