use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::run::PERSONAL_BEST_COMPARISON_NAME;
use crate::{IndexedTime, Time};

/// One timed checkpoint of a run.
///
/// `personal_best_split_time` and the comparison entries are cumulative
/// (time since run start); `best_segment_time` and the history samples are
/// per-segment deltas (time since the previous split).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    /// Cumulative split time of the personal-best attempt.
    pub personal_best_split_time: Time,
    /// Fastest duration ever recorded for this segment alone.
    pub best_segment_time: Time,
    /// Durations observed for this segment, tagged by attempt.
    pub history: Vec<IndexedTime>,
    /// Named cumulative comparison traces, excluding the personal-best
    /// trace, which lives in `personal_best_split_time`.
    pub comparisons: HashMap<String, Time>,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            personal_best_split_time: Time::default(),
            best_segment_time: Time::default(),
            history: Vec::new(),
            comparisons: HashMap::new(),
        }
    }

    /// Cumulative time of a named comparison trace at this segment.
    ///
    /// The designated personal-best name aliases `personal_best_split_time`;
    /// any other missing name reads as fully absent.
    pub fn comparison_time(&self, comparison: &str) -> Time {
        if comparison == PERSONAL_BEST_COMPARISON_NAME {
            self.personal_best_split_time
        } else {
            self.comparisons
                .get(comparison)
                .copied()
                .unwrap_or_default()
        }
    }

    /// Store a comparison trace value, routing the personal-best name to
    /// `personal_best_split_time`.
    pub fn set_comparison_time(&mut self, comparison: &str, time: Time) {
        if comparison == PERSONAL_BEST_COMPARISON_NAME {
            self.personal_best_split_time = time;
        } else {
            self.comparisons.insert(comparison.to_string(), time);
        }
    }
}
