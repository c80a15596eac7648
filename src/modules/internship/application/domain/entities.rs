use chrono::NaiveDate;
use serde::Serialize;

use super::status::InternshipStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Internship {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: Option<i32>,
    pub internship_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: InternshipStatus,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
    pub validated_by: Option<i32>,
}

/// Listing row joined with the names the screens actually display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternshipListItem {
    pub id: i32,
    pub student_id: i32,
    pub student_first_name: Option<String>,
    pub student_last_name: Option<String>,
    pub subject_id: Option<i32>,
    pub subject_title: Option<String>,
    pub internship_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: InternshipStatus,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub supervisor_name: Option<String>,
}

/// Supervisor's finished-internship row: the listing item plus that
/// supervisor's own evaluation, when one exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinishedInternshipItem {
    #[serde(flatten)]
    pub internship: InternshipListItem,
    pub evaluation_id: Option<i32>,
    pub evaluated_on: Option<NaiveDate>,
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
    pub discipline: Option<String>,
    pub interest: Option<String>,
    pub presence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternshipNote {
    pub id: i32,
    pub internship_id: i32,
    pub supervisor_id: i32,
    pub noted_at: chrono::DateTime<chrono::Utc>,
    pub content: String,
}

/// What the acceptance notice needs to know about an internship.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceContext {
    pub student_email: String,
    pub student_name: String,
    pub subject_title: Option<String>,
}
