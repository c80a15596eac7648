mod internship_query;
mod internship_repository;
mod note_repository;

pub use internship_query::InternshipQuery;
pub use internship_repository::{
    AssignSubjectOutcome, InternshipRepository, InternshipRepositoryError, NewInternship,
    UpdateInternshipData,
};
pub use note_repository::{NoteRepository, NoteRepositoryError};
