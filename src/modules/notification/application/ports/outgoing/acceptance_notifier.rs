use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceNotice {
    pub internship_id: i32,
    pub student_email: String,
    pub student_name: String,
    pub subject_title: Option<String>,
}

/// Best-effort side effect fired after an internship reaches the accepted
/// status. Implementations must never propagate failure into the request
/// path; the transition has already committed by the time this runs.
#[async_trait]
pub trait AcceptanceNotifier: Send + Sync {
    async fn send_acceptance_notice(&self, notice: AcceptanceNotice);
}
