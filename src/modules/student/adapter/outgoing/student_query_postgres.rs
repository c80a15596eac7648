use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::student::application::domain::entities::Student;
use crate::student::application::ports::outgoing::StudentQuery;

use super::sea_orm_entity::students::{Column, Entity as Students};
use super::student_repository_postgres::to_domain;

#[derive(Debug, Clone)]
pub struct StudentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentQuery for StudentQueryPostgres {
    async fn list(&self) -> Result<Vec<Student>, String> {
        Ok(Students::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(to_domain)
            .collect())
    }

    async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, String> {
        Ok(Students::find_by_id(student_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .map(to_domain))
    }
}
