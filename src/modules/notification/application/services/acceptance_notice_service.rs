use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::notification::application::ports::outgoing::{
    AcceptanceNotice, AcceptanceNotifier, DocumentGenerator, EmailSender,
};

/// Renders and delivers the acceptance notice: letter artifact first, then
/// the email carrying its link. Runs detached from the request path; every
/// failure is logged and swallowed.
pub struct AcceptanceNoticeService {
    email_sender: Arc<dyn EmailSender + Send + Sync>,
    document_generator: Arc<dyn DocumentGenerator + Send + Sync>,
    sender_name: String,
}

impl AcceptanceNoticeService {
    pub fn new(
        email_sender: Arc<dyn EmailSender + Send + Sync>,
        document_generator: Arc<dyn DocumentGenerator + Send + Sync>,
        sender_name: String,
    ) -> Self {
        Self {
            email_sender,
            document_generator,
            sender_name,
        }
    }

    fn email_subject(subject_title: &str) -> String {
        format!("Internship Acceptance: {subject_title}")
    }

    fn email_body(student_name: &str, document_url: Option<&str>) -> String {
        let mut body = format!(
            "<p>Dear {student_name},</p>\
             <p>We are pleased to inform you that your internship application has been \
             officially <strong>accepted</strong>.</p>"
        );

        match document_url {
            Some(url) => {
                body.push_str(&format!(
                    "<p>You can download your official acceptance letter here: \
                     <a href=\"{url}\">Download Acceptance Letter</a></p>"
                ));
            }
            None => {
                body.push_str(
                    "<p>An official acceptance letter will be provided to you soon.</p>",
                );
            }
        }

        body.push_str(
            "<p>Further details regarding your internship will be communicated to you \
             shortly by the internship office.</p>\
             <p>Congratulations and welcome aboard!</p>\
             <p>Sincerely,</p>",
        );
        body
    }
}

#[async_trait]
impl AcceptanceNotifier for AcceptanceNoticeService {
    async fn send_acceptance_notice(&self, notice: AcceptanceNotice) {
        let subject_title = notice.subject_title.as_deref().unwrap_or("N/A");

        // Letter generation is best-effort: a failure downgrades the email
        // to the "letter to follow" wording instead of aborting.
        let document_url = match self
            .document_generator
            .generate_acceptance_letter(&notice.student_name, subject_title, notice.internship_id)
            .await
        {
            Ok(doc) => {
                info!(
                    internship_id = notice.internship_id,
                    url = %doc.file_url,
                    "Acceptance letter generated"
                );
                Some(doc.file_url)
            }
            Err(e) => {
                error!(
                    internship_id = notice.internship_id,
                    error = %e,
                    "Acceptance letter generation failed"
                );
                None
            }
        };

        let mut body = Self::email_body(&notice.student_name, document_url.as_deref());
        body.push_str(&format!("<p>{}</p>", self.sender_name));

        match self
            .email_sender
            .send_email(
                &notice.student_email,
                &Self::email_subject(subject_title),
                &body,
            )
            .await
        {
            Ok(()) => info!(
                internship_id = notice.internship_id,
                recipient = %notice.student_email,
                "Acceptance email sent"
            ),
            Err(e) => error!(
                internship_id = notice.internship_id,
                error = %e,
                "Acceptance email failed"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::ports::outgoing::GeneratedDocument;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
            if self.fail {
                return Err("smtp down".to_string());
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct StubGenerator {
        fail: bool,
    }

    #[async_trait]
    impl DocumentGenerator for StubGenerator {
        async fn generate_acceptance_letter(
            &self,
            _student_name: &str,
            _subject_title: &str,
            internship_id: i32,
        ) -> Result<GeneratedDocument, String> {
            if self.fail {
                return Err("disk full".to_string());
            }
            Ok(GeneratedDocument {
                file_path: format!("/files/acceptance_{internship_id}.html"),
                file_url: format!("http://localhost/files/acceptance_{internship_id}.html"),
            })
        }
    }

    fn notice() -> AcceptanceNotice {
        AcceptanceNotice {
            internship_id: 5,
            student_email: "yassine@uni.tn".to_string(),
            student_name: "Yassine Gharbi".to_string(),
            subject_title: Some("Plateforme de supervision".to_string()),
        }
    }

    #[tokio::test]
    async fn notice_sends_email_with_letter_link() {
        let sender = Arc::new(RecordingSender::default());
        let service = AcceptanceNoticeService::new(
            sender.clone(),
            Arc::new(StubGenerator { fail: false }),
            "The Internship Management Team".to_string(),
        );

        service.send_acceptance_notice(notice()).await;

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "yassine@uni.tn");
        assert!(subject.contains("Plateforme de supervision"));
        assert!(body.contains("acceptance_5.html"));
        assert!(body.contains("Yassine Gharbi"));
    }

    #[tokio::test]
    async fn letter_failure_still_sends_email() {
        let sender = Arc::new(RecordingSender::default());
        let service = AcceptanceNoticeService::new(
            sender.clone(),
            Arc::new(StubGenerator { fail: true }),
            "The Internship Management Team".to_string(),
        );

        service.send_acceptance_notice(notice()).await;

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].2.contains("will be provided to you soon"));
    }

    #[tokio::test]
    async fn email_failure_is_swallowed() {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(vec![]),
            fail: true,
        });
        let service = AcceptanceNoticeService::new(
            sender,
            Arc::new(StubGenerator { fail: false }),
            "The Internship Management Team".to_string(),
        );

        // Must not panic or propagate anything.
        service.send_acceptance_notice(notice()).await;
    }
}
