mod create_student;
mod delete_student;
mod get_students;
mod update_student;

pub use create_student::{
    CreateStudentCommand, CreateStudentCommandError, CreateStudentError, CreateStudentUseCase,
};
pub use delete_student::{DeleteStudentError, DeleteStudentUseCase};
pub use get_students::{GetStudentsError, GetStudentsUseCase};
pub use update_student::{UpdateStudentCommand, UpdateStudentError, UpdateStudentUseCase};
