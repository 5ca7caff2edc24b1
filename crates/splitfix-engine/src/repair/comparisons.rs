use chrono::TimeDelta;
use splitfix_types::{PERSONAL_BEST_COMPARISON_NAME, Run, TimingMethod};

/// Clamp every comparison trace to be non-decreasing and re-derive best
/// segment times from the personal-best trace.
///
/// Cumulative comparison values never run backward; a value below its
/// predecessor is raised to it. The per-segment duration implied by the
/// personal-best trace is ground truth: wherever it undercuts the stored
/// best segment time (or the best time is unset), it replaces it. Segments
/// without a value for this method leave the running total untouched.
pub(crate) fn clamp_comparison_times(run: &mut Run, method: TimingMethod) {
    let comparisons = run.custom_comparisons.clone();
    for comparison in &comparisons {
        let mut previous = TimeDelta::zero();
        for segment in &mut run.segments {
            let Some(value) = segment.comparison_time(comparison).get(method) else {
                continue;
            };
            let value = if value < previous {
                let clamped = segment
                    .comparison_time(comparison)
                    .with(method, Some(previous));
                segment.set_comparison_time(comparison, clamped);
                previous
            } else {
                value
            };

            let current_segment = value - previous;
            if comparison == PERSONAL_BEST_COMPARISON_NAME
                && segment
                    .best_segment_time
                    .get(method)
                    .is_none_or(|best| best > current_segment)
            {
                segment
                    .best_segment_time
                    .set(method, Some(current_segment));
            }
            previous = value;
        }
    }
}
