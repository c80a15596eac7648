pub mod counter_validate_evaluation;
pub mod list_pending_evaluations;
pub mod submit_evaluation;
