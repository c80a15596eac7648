use async_trait::async_trait;

use crate::subject::application::{
    domain::entities::Subject,
    ports::incoming::use_cases::{
        CreateSubjectCommand, CreateSubjectError, CreateSubjectUseCase, DeleteSubjectError,
        DeleteSubjectUseCase, GetSubjectsError, GetSubjectsUseCase, UpdateSubjectCommand,
        UpdateSubjectError, UpdateSubjectUseCase,
    },
    ports::outgoing::{
        CreateSubjectData, SubjectQuery, SubjectRepository, SubjectRepositoryError,
        UpdateSubjectData,
    },
};

#[derive(Debug, Clone)]
pub struct CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSubjectUseCase for CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSubjectCommand) -> Result<Subject, CreateSubjectError> {
        self.repository
            .insert(CreateSubjectData {
                title: command.title().to_string(),
                description: command.description().to_string(),
                pdf_url: command.pdf_url().cloned(),
            })
            .await
            .map_err(|e| CreateSubjectError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSubjectsUseCase for GetSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Subject>, GetSubjectsError> {
        self.query.list().await.map_err(GetSubjectsError::QueryError)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSubjectUseCase for UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateSubjectCommand) -> Result<Subject, UpdateSubjectError> {
        if command.title.is_none() && command.description.is_none() && command.pdf_url.is_none() {
            return Err(UpdateSubjectError::EmptyUpdate);
        }

        self.repository
            .update(
                command.subject_id,
                UpdateSubjectData {
                    title: command.title,
                    description: command.description,
                    pdf_url: command.pdf_url,
                },
            )
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => UpdateSubjectError::NotFound,
                other => UpdateSubjectError::RepositoryError(other.to_string()),
            })
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSubjectUseCase for DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, subject_id: i32) -> Result<(), DeleteSubjectError> {
        self.repository
            .delete(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => DeleteSubjectError::NotFound,
                other => DeleteSubjectError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSubjectRepository {
        insert_result: Option<Result<Subject, SubjectRepositoryError>>,
        update_result: Option<Result<Subject, SubjectRepositoryError>>,
        delete_result: Option<Result<(), SubjectRepositoryError>>,
    }

    impl MockSubjectRepository {
        fn inserting(result: Result<Subject, SubjectRepositoryError>) -> Self {
            Self {
                insert_result: Some(result),
                update_result: None,
                delete_result: None,
            }
        }

        fn updating(result: Result<Subject, SubjectRepositoryError>) -> Self {
            Self {
                insert_result: None,
                update_result: Some(result),
                delete_result: None,
            }
        }

        fn deleting(result: Result<(), SubjectRepositoryError>) -> Self {
            Self {
                insert_result: None,
                update_result: None,
                delete_result: Some(result),
            }
        }
    }

    #[async_trait]
    impl SubjectRepository for MockSubjectRepository {
        async fn insert(
            &self,
            _data: CreateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            self.insert_result.clone().expect("insert not expected")
        }

        async fn update(
            &self,
            _subject_id: i32,
            _data: UpdateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            self.update_result.clone().expect("update not expected")
        }

        async fn delete(&self, _subject_id: i32) -> Result<(), SubjectRepositoryError> {
            self.delete_result.clone().expect("delete not expected")
        }
    }

    fn sample_subject() -> Subject {
        Subject {
            id: 9,
            title: "Plateforme de supervision".to_string(),
            description: "Surveillance réseau temps réel".to_string(),
            pdf_url: None,
        }
    }

    #[tokio::test]
    async fn create_subject_returns_stored_row() {
        let service =
            CreateSubjectService::new(MockSubjectRepository::inserting(Ok(sample_subject())));

        let command = CreateSubjectCommand::new(
            "Plateforme de supervision".to_string(),
            "Surveillance réseau temps réel".to_string(),
            None,
        )
        .unwrap();

        let result = service.execute(command).await;
        assert_eq!(result.unwrap().id, 9);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let service = UpdateSubjectService::new(MockSubjectRepository::updating(Err(
            SubjectRepositoryError::DatabaseError("must not be reached".to_string()),
        )));

        let result = service
            .execute(UpdateSubjectCommand {
                subject_id: 9,
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(UpdateSubjectError::EmptyUpdate)));
    }

    #[tokio::test]
    async fn update_attaches_pdf_url() {
        let mut updated = sample_subject();
        updated.pdf_url = Some("http://localhost/files/sujet_9.pdf".to_string());

        let service = UpdateSubjectService::new(MockSubjectRepository::updating(Ok(updated)));

        let result = service
            .execute(UpdateSubjectCommand {
                subject_id: 9,
                pdf_url: Some("http://localhost/files/sujet_9.pdf".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.pdf_url.is_some());
    }

    #[tokio::test]
    async fn delete_missing_subject_is_not_found() {
        let service = DeleteSubjectService::new(MockSubjectRepository::deleting(Err(
            SubjectRepositoryError::NotFound,
        )));

        let result = service.execute(404).await;
        assert!(matches!(result, Err(DeleteSubjectError::NotFound)));
    }
}
