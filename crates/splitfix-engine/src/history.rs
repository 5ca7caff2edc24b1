use splitfix_types::Run;

/// Smallest attempt index present in any segment's history, capped at 1.
///
/// Synthetic samples are anchored one below this value, so the result can
/// never exceed 1: a run whose history only contains real attempts still
/// hands out non-positive indices for fabricated samples.
pub fn min_history_index(run: &Run) -> i32 {
    run.segments
        .iter()
        .flat_map(|segment| &segment.history)
        .map(|sample| sample.index.raw())
        .fold(1, i32::min)
}
