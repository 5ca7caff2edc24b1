pub mod attempt;
pub mod run;
pub mod segment;
pub mod time;

pub use attempt::{Attempt, AttemptIndex, IndexedTime};
pub use run::{PERSONAL_BEST_COMPARISON_NAME, Run};
pub use segment::Segment;
pub use time::{Time, TimingMethod};
