mod create_student_service;
mod delete_student_service;
mod get_students_service;
mod update_student_service;

pub use create_student_service::CreateStudentService;
pub use delete_student_service::DeleteStudentService;
pub use get_students_service::GetStudentsService;
pub use update_student_service::UpdateStudentService;
