pub mod attestation;
pub mod auth;
pub mod evaluation;
pub mod internship;
pub mod notification;
pub mod stats;
pub mod student;
pub mod subject;
