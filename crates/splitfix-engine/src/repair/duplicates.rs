use splitfix_types::{AttemptIndex, Run, TimingMethod};

use crate::history::min_history_index;

/// Null out synthetic sample values that duplicate another recorded value.
///
/// Synthetic and imported samples can repeat a measurement a real attempt
/// already contributed, double-counting it. For every non-positive index,
/// if the sample's value for this method is shared by more than one sample
/// in the segment's history, only that method's value is cleared; the other
/// method and the sample itself stay. The occurrence count is taken against
/// the live history, so a value cleared for one index is no longer counted
/// when the next index is inspected.
pub(crate) fn suppress_duplicate_values(run: &mut Run, method: TimingMethod) {
    let min_index = min_history_index(run);
    for segment in &mut run.segments {
        for raw in min_index..=0 {
            let attempt = AttemptIndex::from_raw(raw);
            let Some(position) = segment.history.iter().position(|s| s.index == attempt) else {
                continue;
            };
            let Some(value) = segment.history[position].time.get(method) else {
                continue;
            };
            let occurrences = segment
                .history
                .iter()
                .filter(|s| s.time.get(method) == Some(value))
                .count();
            if occurrences > 1 {
                segment.history[position].time.set(method, None);
            }
        }
    }
}
