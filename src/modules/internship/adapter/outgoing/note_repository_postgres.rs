use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set};
use std::sync::Arc;

use crate::internship::application::domain::entities::InternshipNote;
use crate::internship::application::ports::outgoing::{NoteRepository, NoteRepositoryError};

use super::sea_orm_entity::internship_notes::{
    ActiveModel as NoteActiveModel, Column, Entity as Notes, Model as NoteModel,
};

#[derive(Debug, Clone)]
pub struct NoteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NoteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: NoteModel) -> InternshipNote {
    InternshipNote {
        id: model.id,
        internship_id: model.internship_id,
        supervisor_id: model.supervisor_id,
        noted_at: model.noted_at.with_timezone(&chrono::Utc),
        content: model.content,
    }
}

#[async_trait]
impl NoteRepository for NoteRepositoryPostgres {
    async fn add(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        content: String,
    ) -> Result<InternshipNote, NoteRepositoryError> {
        let active = NoteActiveModel {
            internship_id: Set(internship_id),
            supervisor_id: Set(supervisor_id),
            noted_at: Set(chrono::Utc::now().fixed_offset()),
            content: Set(content),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(to_domain(inserted))
    }

    async fn list_for_internship(
        &self,
        internship_id: i32,
    ) -> Result<Vec<InternshipNote>, NoteRepositoryError> {
        Ok(Notes::find()
            .filter(Column::InternshipId.eq(internship_id))
            .order_by_desc(Column::NotedAt)
            .all(&*self.db)
            .await
            .map_err(|e| NoteRepositoryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect())
    }
}
