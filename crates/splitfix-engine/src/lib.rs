// Engine module - stateless repair passes and history synthesis
// This layer sits between the run data model (types) and the run-management surface

pub mod history;
pub mod repair;
pub mod synthesis;

pub use history::min_history_index;
pub use repair::reconcile;
pub use synthesis::{synthesize_best_segment_sample, synthesize_history_from_personal_best};
