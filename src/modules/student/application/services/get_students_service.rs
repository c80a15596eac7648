use async_trait::async_trait;

use crate::student::application::{
    domain::entities::Student,
    ports::incoming::use_cases::{GetStudentsError, GetStudentsUseCase},
    ports::outgoing::StudentQuery,
};

#[derive(Debug, Clone)]
pub struct GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStudentsUseCase for GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Student>, GetStudentsError> {
        self.query
            .list()
            .await
            .map_err(GetStudentsError::QueryError)
    }
}
