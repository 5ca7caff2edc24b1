use splitfix_types::{AttemptIndex, Run};

use crate::history::min_history_index;

/// Remove history left behind by attempts that never reached a segment.
///
/// For each candidate attempt index, samples with no measurement in either
/// method are cached while the scan walks the segments in order. A segment
/// with no sample at all for the attempt flushes the cache: the placeholders
/// immediately before the gap carry no information and are deleted. A real
/// measurement breaks the streak and keeps it. A streak still open when the
/// scan ends is flushed the same way.
pub(crate) fn prune_dangling_history(run: &mut Run) {
    let max_index = run.max_attempt_index();
    for raw in min_history_index(run)..=max_index {
        let attempt = AttemptIndex::from_raw(raw);
        // Segment positions of the current streak of fully-null samples.
        let mut cache: Vec<usize> = Vec::new();
        for position in 0..run.segments.len() {
            // None: no sample for this attempt; Some(true): fully null;
            // Some(false): carries a measurement.
            let sample_state = run.segments[position]
                .history
                .iter()
                .find(|s| s.index == attempt)
                .map(|s| s.time.is_empty());
            match sample_state {
                None => flush_cache(run, &mut cache, attempt),
                Some(true) => cache.push(position),
                Some(false) => cache.clear(),
            }
        }
        flush_cache(run, &mut cache, attempt);
    }
}

fn flush_cache(run: &mut Run, cache: &mut Vec<usize>, attempt: AttemptIndex) {
    for &position in cache.iter() {
        let history = &mut run.segments[position].history;
        if let Some(i) = history.iter().position(|s| s.index == attempt) {
            history.remove(i);
        }
    }
    cache.clear();
}
