use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::subject::application::domain::entities::Subject;
use crate::subject::application::ports::outgoing::{
    CreateSubjectData, SubjectRepository, SubjectRepositoryError, UpdateSubjectData,
};

use super::sea_orm_entity::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};

#[derive(Debug, Clone)]
pub struct SubjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn to_domain(model: SubjectModel) -> Subject {
    Subject {
        id: model.id,
        title: model.title,
        description: model.description,
        pdf_url: model.pdf_url,
    }
}

fn map_db_err(e: DbErr) -> SubjectRepositoryError {
    SubjectRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryPostgres {
    async fn insert(&self, data: CreateSubjectData) -> Result<Subject, SubjectRepositoryError> {
        let active = SubjectActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            pdf_url: Set(data.pdf_url),
            ..Default::default()
        };

        let inserted: SubjectModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }

    async fn update(
        &self,
        subject_id: i32,
        data: UpdateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let existing = Subjects::find_by_id(subject_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SubjectRepositoryError::NotFound)?;

        let mut active: SubjectActiveModel = existing.into();

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(pdf_url) = data.pdf_url {
            active.pdf_url = Set(Some(pdf_url));
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(updated))
    }

    async fn delete(&self, subject_id: i32) -> Result<(), SubjectRepositoryError> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SubjectRepositoryError::NotFound);
        }

        Ok(())
    }
}
