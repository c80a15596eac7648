mod evaluate_internship;
mod list_pending_evaluations;
mod validate_evaluation;

pub use evaluate_internship::evaluate_internship_handler;
pub use list_pending_evaluations::list_pending_evaluations_handler;
pub use validate_evaluation::validate_evaluation_handler;
