use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: i32,
    pub username: String,
    pub lastname: String,
    pub email: String,
    /// National identity card number; unique like the email.
    pub cin: String,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}
