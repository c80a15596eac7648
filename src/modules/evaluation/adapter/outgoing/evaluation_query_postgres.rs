use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::JoinType;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::evaluation::application::domain::entities::PendingEvaluationItem;
use crate::evaluation::application::ports::outgoing::EvaluationQuery;
use crate::internship::adapter::outgoing::sea_orm_entity::internships;
use crate::student::adapter::outgoing::sea_orm_entity::students;
use crate::subject::adapter::outgoing::sea_orm_entity as subjects;

use super::sea_orm_entity::evaluations::{Column, Entity as Evaluations, Relation};

#[derive(Debug, Clone)]
pub struct EvaluationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EvaluationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct PendingRow {
    evaluation_id: i32,
    internship_id: i32,
    evaluated_on: NaiveDate,
    missed_days: Option<i32>,
    comments: Option<String>,
    discipline: Option<String>,
    interest: Option<String>,
    presence: Option<String>,
    supervisor_id: i32,
    supervisor_name: Option<String>,
    student_first_name: Option<String>,
    student_last_name: Option<String>,
    subject_title: Option<String>,
}

#[async_trait]
impl EvaluationQuery for EvaluationQueryPostgres {
    async fn list_pending(&self) -> Result<Vec<PendingEvaluationItem>, String> {
        let rows = Evaluations::find()
            .select_only()
            .column_as(Column::Id, "evaluation_id")
            .column(Column::InternshipId)
            .column(Column::EvaluatedOn)
            .column(Column::MissedDays)
            .column(Column::Comments)
            .column(Column::Discipline)
            .column(Column::Interest)
            .column(Column::Presence)
            .column(Column::SupervisorId)
            .column_as(users::Column::Username, "supervisor_name")
            .column_as(students::Column::Username, "student_first_name")
            .column_as(students::Column::Lastname, "student_last_name")
            .column_as(subjects::Column::Title, "subject_title")
            .join(JoinType::InnerJoin, Relation::Internship.def())
            .join(JoinType::LeftJoin, Relation::Supervisor.def())
            .join(
                JoinType::LeftJoin,
                internships::Relation::Student.def(),
            )
            .join(
                JoinType::LeftJoin,
                internships::Relation::Subject.def(),
            )
            .filter(Column::ValidatedBy.is_null())
            .order_by_desc(Column::EvaluatedOn)
            .into_model::<PendingRow>()
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(rows
            .into_iter()
            .map(|r| PendingEvaluationItem {
                evaluation_id: r.evaluation_id,
                internship_id: r.internship_id,
                evaluated_on: r.evaluated_on,
                missed_days: r.missed_days,
                comments: r.comments,
                discipline: r.discipline,
                interest: r.interest,
                presence: r.presence,
                supervisor_id: r.supervisor_id,
                supervisor_name: r.supervisor_name,
                student_first_name: r.student_first_name,
                student_last_name: r.student_last_name,
                subject_title: r.subject_title,
            })
            .collect())
    }
}
