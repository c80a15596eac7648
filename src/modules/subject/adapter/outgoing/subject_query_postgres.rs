use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::subject::application::domain::entities::Subject;
use crate::subject::application::ports::outgoing::SubjectQuery;

use super::sea_orm_entity::{Column, Entity as Subjects};
use super::subject_repository_postgres::to_domain;

#[derive(Debug, Clone)]
pub struct SubjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectQuery for SubjectQueryPostgres {
    async fn list(&self) -> Result<Vec<Subject>, String> {
        Ok(Subjects::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(to_domain)
            .collect())
    }
}
