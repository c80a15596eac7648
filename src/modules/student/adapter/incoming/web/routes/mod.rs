mod create_student;
mod delete_student;
mod get_students;
mod update_student;

pub use create_student::create_student_handler;
pub use delete_student::delete_student_handler;
pub use get_students::get_students_handler;
pub use update_student::update_student_handler;
