use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attestation {
    pub id: i32,
    pub internship_id: i32,
    pub generated_on: NaiveDate,
    /// Verification URL embedded in the printed QR code.
    pub qr_code_data: String,
}

/// The certificate bundle: everything the attestation viewer renders,
/// grouped the way the screen displays it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttestationData {
    pub attestation_id: i32,
    pub generated_on: NaiveDate,
    pub qr_code_data: String,
    pub internship: AttestationInternship,
    pub student: AttestationParty,
    pub subject: AttestationSubject,
    pub supervisor: Option<AttestationParty>,
    pub evaluation: AttestationEvaluation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttestationInternship {
    pub internship_id: i32,
    pub internship_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttestationParty {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttestationSubject {
    pub subject_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttestationEvaluation {
    pub evaluation_id: i32,
    pub evaluated_on: NaiveDate,
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
}
