use serde::{Deserialize, Serialize};

use crate::{Attempt, Segment, Time};

/// Name of the designated personal-best comparison trace.
pub const PERSONAL_BEST_COMPARISON_NAME: &str = "Personal Best";

/// An ordered sequence of segments plus the comparison names and attempt
/// bookkeeping shared across them.
///
/// The run exclusively owns its segments and their nested samples; the
/// engine mutates it in place and never retains references across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub segments: Vec<Segment>,
    /// Comparison trace names, always including the personal-best name.
    pub custom_comparisons: Vec<String>,
    /// Real attempts known to this run, in recording order.
    pub attempt_history: Vec<Attempt>,
}

impl Run {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            custom_comparisons: vec![PERSONAL_BEST_COMPARISON_NAME.to_string()],
            attempt_history: Vec::new(),
        }
    }

    /// Append a segment with the given personal-best split and best
    /// segment time.
    pub fn add_segment(
        &mut self,
        name: impl Into<String>,
        personal_best_split_time: Time,
        best_segment_time: Time,
    ) {
        let mut segment = Segment::new(name);
        segment.personal_best_split_time = personal_best_split_time;
        segment.best_segment_time = best_segment_time;
        self.segments.push(segment);
    }

    /// Record a finished attempt at the next free index.
    pub fn add_attempt(&mut self, time: Time) {
        let index = self.max_attempt_index() + 1;
        self.attempt_history.push(Attempt::new(index, time));
    }

    /// Largest real attempt index known to this run, or 0 when no attempt
    /// was recorded yet.
    pub fn max_attempt_index(&self) -> i32 {
        self.attempt_history
            .iter()
            .map(|attempt| attempt.index)
            .max()
            .unwrap_or(0)
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}
