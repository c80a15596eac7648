mod create_subject;
mod delete_subject;
mod get_subjects;
mod update_subject;

pub use create_subject::{
    CreateSubjectCommand, CreateSubjectCommandError, CreateSubjectError, CreateSubjectUseCase,
};
pub use delete_subject::{DeleteSubjectError, DeleteSubjectUseCase};
pub use get_subjects::{GetSubjectsError, GetSubjectsUseCase};
pub use update_subject::{UpdateSubjectCommand, UpdateSubjectError, UpdateSubjectUseCase};
