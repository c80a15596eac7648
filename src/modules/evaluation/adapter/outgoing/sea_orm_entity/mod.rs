pub mod evaluations;
