use async_trait::async_trait;
use std::sync::Mutex;

use crate::notification::application::ports::outgoing::EmailSender;

/// Collects outgoing mail instead of sending it. Used by tests and by the
/// development profile when no SMTP settings are configured.
#[derive(Default)]
pub struct MockEmailSender {
    pub sent: Mutex<Vec<SentEmail>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
