mod comparisons;
mod duplicates;
mod floor;
mod pruning;

use splitfix_types::{Run, TimingMethod};

/// Repair a run's historical data in place.
///
/// Runs the four repair passes for real time, then again for game time.
/// The order is a correctness requirement: comparison clamping assumes the
/// history floor already removed impossible samples, and the pruning and
/// duplicate passes operate on the cleaned result. A second call on an
/// already-consistent run is a no-op.
pub fn reconcile(run: &mut Run) {
    for method in TimingMethod::all() {
        reconcile_with_method(run, method);
    }
    // The last method's duplicate pass can fully null a synthetic sample
    // after its own pruning already ran; sweep once more so the result is
    // a fixed point.
    pruning::prune_dangling_history(run);
}

fn reconcile_with_method(run: &mut Run, method: TimingMethod) {
    floor::enforce_history_floor(run, method);
    comparisons::clamp_comparison_times(run, method);
    pruning::prune_dangling_history(run);
    duplicates::suppress_duplicate_values(run, method);
}
