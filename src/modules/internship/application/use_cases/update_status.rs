use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::internship::application::{
    domain::status::InternshipStatus,
    ports::outgoing::{InternshipQuery, InternshipRepository, InternshipRepositoryError},
};
use crate::notification::application::ports::outgoing::{AcceptanceNotice, AcceptanceNotifier};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatusUpdateResult {
    pub internship_id: i32,
    pub status: InternshipStatus,
    /// `Some("dispatched")` when the acceptance notice was queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<&'static str>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateStatusError {
    #[error("{0}")]
    BadStatus(String),

    #[error("Illegal status transition from {from} to {to}")]
    IllegalTransition {
        from: InternshipStatus,
        to: InternshipStatus,
    },

    #[error("Internship not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        internship_id: i32,
        new_status: &str,
    ) -> Result<StatusUpdateResult, UpdateStatusError>;
}

/// Department-head direct status write, transition-checked like every
/// other status mutation. Landing on `Validated` queues the acceptance
/// notice (letter + email) on a detached task: the transition has already
/// committed, so a notification failure can only ever cost the email,
/// never the state.
pub struct UpdateStatusUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    repository: R,
    query: Q,
    notifier: Arc<dyn AcceptanceNotifier + Send + Sync>,
}

impl<R, Q> UpdateStatusUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        query: Q,
        notifier: Arc<dyn AcceptanceNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            query,
            notifier,
        }
    }
}

#[async_trait]
impl<R, Q> IUpdateStatusUseCase for UpdateStatusUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        internship_id: i32,
        new_status: &str,
    ) -> Result<StatusUpdateResult, UpdateStatusError> {
        let next = InternshipStatus::from_str(new_status)
            .map_err(|e| UpdateStatusError::BadStatus(e.to_string()))?;

        let current = self
            .query
            .find_by_id(internship_id)
            .await
            .map_err(UpdateStatusError::RepositoryError)?
            .ok_or(UpdateStatusError::NotFound)?
            .status;

        if next != current && !current.can_transition_to(next) {
            return Err(UpdateStatusError::IllegalTransition {
                from: current,
                to: next,
            });
        }

        self.repository
            .set_status(internship_id, next)
            .await
            .map_err(|e| match e {
                InternshipRepositoryError::NotFound => UpdateStatusError::NotFound,
                other => UpdateStatusError::RepositoryError(other.to_string()),
            })?;

        info!(internship_id, status = %next, "Internship status updated");

        let mut notification = None;
        if next == InternshipStatus::Validated && next != current {
            notification = Some("dispatched");
            match self.query.acceptance_context(internship_id).await {
                Ok(Some(ctx)) => {
                    let notifier = Arc::clone(&self.notifier);
                    let notice = AcceptanceNotice {
                        internship_id,
                        student_email: ctx.student_email,
                        student_name: ctx.student_name,
                        subject_title: ctx.subject_title,
                    };
                    tokio::spawn(async move {
                        notifier.send_acceptance_notice(notice).await;
                    });
                }
                Ok(None) => {
                    warn!(internship_id, "No student context found for acceptance notice");
                    notification = Some("skipped");
                }
                Err(e) => {
                    warn!(internship_id, error = %e, "Failed to load acceptance context");
                    notification = Some("skipped");
                }
            }
        }

        Ok(StatusUpdateResult {
            internship_id,
            status: next,
            notification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internship::application::domain::entities::{
        AcceptanceContext, FinishedInternshipItem, Internship, InternshipListItem,
    };
    use crate::internship::application::ports::outgoing::{
        AssignSubjectOutcome, NewInternship, UpdateInternshipData,
    };
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn internship(status: InternshipStatus) -> Internship {
        Internship {
            id: 5,
            student_id: 3,
            subject_id: Some(9),
            internship_type: "PFE".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            status,
            is_paid: false,
            stipend_amount: None,
            supervisor_id: Some(2),
            academic_supervisor_id: None,
            validated_by: None,
        }
    }

    struct MockRepo {
        set_status_result: Result<(), InternshipRepositoryError>,
        statuses_written: Mutex<Vec<InternshipStatus>>,
    }

    #[async_trait]
    impl InternshipRepository for MockRepo {
        async fn insert(
            &self,
            _data: NewInternship,
        ) -> Result<Internship, InternshipRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _internship_id: i32,
            _data: UpdateInternshipData,
        ) -> Result<Internship, InternshipRepositoryError> {
            unimplemented!()
        }

        async fn assign_subject(
            &self,
            _internship_id: i32,
            _subject_id: i32,
            _supervisor_id: i32,
        ) -> Result<AssignSubjectOutcome, InternshipRepositoryError> {
            unimplemented!()
        }

        async fn set_status(
            &self,
            _internship_id: i32,
            status: InternshipStatus,
        ) -> Result<(), InternshipRepositoryError> {
            self.statuses_written.lock().unwrap().push(status);
            self.set_status_result.clone()
        }
    }

    struct MockQuery {
        current: Option<Internship>,
        context: Option<AcceptanceContext>,
    }

    #[async_trait]
    impl InternshipQuery for MockQuery {
        async fn find_by_id(&self, _internship_id: i32) -> Result<Option<Internship>, String> {
            Ok(self.current.clone())
        }

        async fn list(
            &self,
            _status: Option<InternshipStatus>,
        ) -> Result<Vec<InternshipListItem>, String> {
            unimplemented!()
        }

        async fn list_by_supervisor(
            &self,
            _supervisor_id: i32,
        ) -> Result<Vec<InternshipListItem>, String> {
            unimplemented!()
        }

        async fn list_finished_by_supervisor(
            &self,
            _supervisor_id: i32,
            _as_of: NaiveDate,
        ) -> Result<Vec<FinishedInternshipItem>, String> {
            unimplemented!()
        }

        async fn list_proposed(&self) -> Result<Vec<InternshipListItem>, String> {
            unimplemented!()
        }

        async fn is_assigned_to(
            &self,
            _internship_id: i32,
            _supervisor_id: i32,
        ) -> Result<bool, String> {
            unimplemented!()
        }

        async fn acceptance_context(
            &self,
            _internship_id: i32,
        ) -> Result<Option<AcceptanceContext>, String> {
            Ok(self.context.clone())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<AcceptanceNotice>>,
    }

    #[async_trait]
    impl AcceptanceNotifier for RecordingNotifier {
        async fn send_acceptance_notice(&self, notice: AcceptanceNotice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    fn context() -> AcceptanceContext {
        AcceptanceContext {
            student_email: "yassine@uni.tn".to_string(),
            student_name: "Yassine Gharbi".to_string(),
            subject_title: Some("Plateforme de supervision".to_string()),
        }
    }

    #[tokio::test]
    async fn validated_transition_dispatches_notice() {
        let notifier = Arc::new(RecordingNotifier::default());
        let uc = UpdateStatusUseCase::new(
            MockRepo {
                set_status_result: Ok(()),
                statuses_written: Mutex::new(vec![]),
            },
            MockQuery {
                current: Some(internship(InternshipStatus::Finished)),
                context: Some(context()),
            },
            notifier.clone(),
        );

        let result = uc.execute(5, "Validated").await.unwrap();

        assert_eq!(result.status, InternshipStatus::Validated);
        assert_eq!(result.notification, Some("dispatched"));

        // The notice runs on a spawned task; give it a tick to land.
        tokio::task::yield_now().await;
        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].student_email, "yassine@uni.tn");
    }

    #[tokio::test]
    async fn rejected_transition_sends_nothing() {
        let notifier = Arc::new(RecordingNotifier::default());
        let uc = UpdateStatusUseCase::new(
            MockRepo {
                set_status_result: Ok(()),
                statuses_written: Mutex::new(vec![]),
            },
            MockQuery {
                current: Some(internship(InternshipStatus::Finished)),
                context: Some(context()),
            },
            notifier.clone(),
        );

        let result = uc.execute(5, "Rejected").await.unwrap();

        assert_eq!(result.notification, None);
        tokio::task::yield_now().await;
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn illegal_transition_writes_nothing() {
        let repo = MockRepo {
            set_status_result: Ok(()),
            statuses_written: Mutex::new(vec![]),
        };
        let uc = UpdateStatusUseCase::new(
            repo,
            MockQuery {
                current: Some(internship(InternshipStatus::Proposed)),
                context: None,
            },
            Arc::new(RecordingNotifier::default()),
        );

        let result = uc.execute(5, "Validated").await;

        assert!(matches!(
            result,
            Err(UpdateStatusError::IllegalTransition { .. })
        ));
    }

    #[tokio::test]
    async fn missing_internship_is_not_found() {
        let uc = UpdateStatusUseCase::new(
            MockRepo {
                set_status_result: Ok(()),
                statuses_written: Mutex::new(vec![]),
            },
            MockQuery {
                current: None,
                context: None,
            },
            Arc::new(RecordingNotifier::default()),
        );

        let result = uc.execute(404, "Validated").await;
        assert!(matches!(result, Err(UpdateStatusError::NotFound)));
    }

    #[tokio::test]
    async fn missing_context_reports_skipped_but_succeeds() {
        let uc = UpdateStatusUseCase::new(
            MockRepo {
                set_status_result: Ok(()),
                statuses_written: Mutex::new(vec![]),
            },
            MockQuery {
                current: Some(internship(InternshipStatus::Finished)),
                context: None,
            },
            Arc::new(RecordingNotifier::default()),
        );

        let result = uc.execute(5, "Validated").await.unwrap();
        assert_eq!(result.notification, Some("skipped"));
    }
}
