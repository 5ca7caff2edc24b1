use splitfix_types::{Run, TimingMethod};

/// Enforce the best-segment floor on every history sample.
///
/// A sample below the best segment time would imply an impossible record,
/// so it is raised to the floor. A sample that carries a measurement while
/// the segment has no best segment time at all is residue from a prior
/// inconsistent state and is dropped. Samples without a measurement for
/// this method are left alone.
pub(crate) fn enforce_history_floor(run: &mut Run, method: TimingMethod) {
    for segment in &mut run.segments {
        let floor = segment.best_segment_time.get(method);
        segment
            .history
            .retain_mut(|sample| match (floor, sample.time.get(method)) {
                (Some(floor), Some(value)) => {
                    if value < floor {
                        sample.time.set(method, Some(floor));
                    }
                    true
                }
                (None, Some(_)) => false,
                _ => true,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use splitfix_types::{AttemptIndex, IndexedTime, Run, Segment, Time};

    fn secs(n: i64) -> TimeDelta {
        TimeDelta::seconds(n)
    }

    fn sample(time: Time, raw: i32) -> IndexedTime {
        IndexedTime::new(time, AttemptIndex::from_raw(raw))
    }

    #[test]
    fn test_raises_samples_below_the_floor() {
        let mut run = Run::new();
        let mut segment = Segment::new("Boss");
        segment.best_segment_time = Time::from_real_time(secs(5));
        segment.history.push(sample(Time::from_real_time(secs(3)), 1));
        segment.history.push(sample(Time::from_real_time(secs(7)), 2));
        run.segments.push(segment);

        enforce_history_floor(&mut run, TimingMethod::RealTime);

        let history = &run.segments[0].history;
        assert_eq!(history[0].time.real_time, Some(secs(5)));
        assert_eq!(history[1].time.real_time, Some(secs(7)));
    }

    #[test]
    fn test_drops_measured_samples_without_a_floor() {
        let mut run = Run::new();
        let mut segment = Segment::new("Boss");
        // Two measured samples back to back: both must go, the second must
        // not be skipped by the removal of the first.
        segment.history.push(sample(Time::from_real_time(secs(4)), 1));
        segment.history.push(sample(Time::from_real_time(secs(6)), 2));
        segment.history.push(sample(Time::default(), 3));
        run.segments.push(segment);

        enforce_history_floor(&mut run, TimingMethod::RealTime);

        let history = &run.segments[0].history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].index.raw(), 3);
    }

    #[test]
    fn test_ignores_the_other_timing_method() {
        let mut run = Run::new();
        let mut segment = Segment::new("Boss");
        segment.best_segment_time = Time::from_real_time(secs(5));
        segment
            .history
            .push(sample(Time::new(Some(secs(8)), Some(secs(2))), 1));
        run.segments.push(segment);

        enforce_history_floor(&mut run, TimingMethod::RealTime);

        // game_time has no floor and no measurement rule was triggered for it
        assert_eq!(run.segments[0].history[0].time.game_time, Some(secs(2)));
    }
}
