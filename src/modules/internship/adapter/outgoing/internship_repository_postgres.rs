use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::str::FromStr;
use std::sync::Arc;

use crate::internship::application::domain::{
    entities::Internship, status::InternshipStatus,
};
use crate::internship::application::ports::outgoing::{
    AssignSubjectOutcome, InternshipRepository, InternshipRepositoryError, NewInternship,
    UpdateInternshipData,
};

use super::sea_orm_entity::internships::{
    ActiveModel as InternshipActiveModel, Column, Entity as Internships, Model as InternshipModel,
};

#[derive(Debug, Clone)]
pub struct InternshipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InternshipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn to_domain(model: InternshipModel) -> Result<Internship, String> {
    let status = InternshipStatus::from_str(&model.status)
        .map_err(|e| format!("Corrupt status value in internships table: {}", e))?;

    Ok(Internship {
        id: model.id,
        student_id: model.student_id,
        subject_id: model.subject_id,
        internship_type: model.internship_type,
        start_date: model.start_date,
        end_date: model.end_date,
        status,
        is_paid: model.is_paid,
        stipend_amount: model.stipend_amount,
        supervisor_id: model.supervisor_id,
        academic_supervisor_id: model.academic_supervisor_id,
        validated_by: model.validated_by,
    })
}

fn map_db_err(e: DbErr) -> InternshipRepositoryError {
    let text = e.to_string();
    if text.contains("violates foreign key constraint") {
        let what = if text.contains("student") {
            "student"
        } else if text.contains("subject") {
            "subject"
        } else if text.contains("supervisor") {
            "supervisor"
        } else {
            "record"
        };
        return InternshipRepositoryError::BrokenReference(what.to_string());
    }
    InternshipRepositoryError::DatabaseError(text)
}

#[async_trait]
impl InternshipRepository for InternshipRepositoryPostgres {
    async fn insert(&self, data: NewInternship) -> Result<Internship, InternshipRepositoryError> {
        let active = InternshipActiveModel {
            student_id: Set(data.student_id),
            subject_id: Set(data.subject_id),
            internship_type: Set(data.internship_type),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            status: Set(data.status.as_str().to_string()),
            is_paid: Set(data.is_paid),
            stipend_amount: Set(data.stipend_amount),
            supervisor_id: Set(data.supervisor_id),
            academic_supervisor_id: Set(data.academic_supervisor_id),
            ..Default::default()
        };

        let inserted: InternshipModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        to_domain(inserted).map_err(InternshipRepositoryError::DatabaseError)
    }

    async fn update(
        &self,
        internship_id: i32,
        data: UpdateInternshipData,
    ) -> Result<Internship, InternshipRepositoryError> {
        let existing = Internships::find_by_id(internship_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(InternshipRepositoryError::NotFound)?;

        let mut active: InternshipActiveModel = existing.into();

        if let Some(internship_type) = data.internship_type {
            active.internship_type = Set(internship_type);
        }
        if let Some(start_date) = data.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = data.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(status) = data.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(is_paid) = data.is_paid {
            active.is_paid = Set(is_paid);
        }
        if let Some(stipend_amount) = data.stipend_amount {
            active.stipend_amount = Set(stipend_amount);
        }
        if let Some(supervisor_id) = data.supervisor_id {
            active.supervisor_id = Set(supervisor_id);
        }
        if let Some(academic_supervisor_id) = data.academic_supervisor_id {
            active.academic_supervisor_id = Set(academic_supervisor_id);
        }
        if let Some(validated_by) = data.validated_by {
            active.validated_by = Set(validated_by);
        }
        active.updated_at = Set(chrono::Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        to_domain(updated).map_err(InternshipRepositoryError::DatabaseError)
    }

    async fn assign_subject(
        &self,
        internship_id: i32,
        subject_id: i32,
        supervisor_id: i32,
    ) -> Result<AssignSubjectOutcome, InternshipRepositoryError> {
        // One guarded statement; the WHERE clause is the whole concurrency
        // story. A competing supervisor's UPDATE matches zero rows.
        let result = Internships::update_many()
            .col_expr(Column::SubjectId, subject_id.into())
            .col_expr(Column::SupervisorId, supervisor_id.into())
            .col_expr(
                Column::Status,
                InternshipStatus::InProgress.as_str().into(),
            )
            .col_expr(
                Column::UpdatedAt,
                chrono::Utc::now().fixed_offset().into(),
            )
            .filter(
                Condition::all()
                    .add(Column::Id.eq(internship_id))
                    .add(
                        Condition::any()
                            .add(Column::SupervisorId.is_null())
                            .add(Column::SupervisorId.eq(supervisor_id)),
                    ),
            )
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            Ok(AssignSubjectOutcome::NotAssignable)
        } else {
            Ok(AssignSubjectOutcome::Assigned)
        }
    }

    async fn set_status(
        &self,
        internship_id: i32,
        status: InternshipStatus,
    ) -> Result<(), InternshipRepositoryError> {
        let result = Internships::update_many()
            .col_expr(Column::Status, status.as_str().into())
            .col_expr(
                Column::UpdatedAt,
                chrono::Utc::now().fixed_offset().into(),
            )
            .filter(Column::Id.eq(internship_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(InternshipRepositoryError::NotFound);
        }

        Ok(())
    }
}
