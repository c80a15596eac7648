use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, IntoCondition, JoinType};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::str::FromStr;
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::evaluation::adapter::outgoing::sea_orm_entity::evaluations;
use crate::internship::application::domain::{
    entities::{AcceptanceContext, FinishedInternshipItem, Internship, InternshipListItem},
    status::InternshipStatus,
};
use crate::internship::application::ports::outgoing::InternshipQuery;
use crate::student::adapter::outgoing::sea_orm_entity::students;
use crate::subject::adapter::outgoing::sea_orm_entity as subjects;

use super::internship_repository_postgres::to_domain;
use super::sea_orm_entity::internships::{Column, Entity as Internships, Relation};

#[derive(Debug, Clone)]
pub struct InternshipQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InternshipQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Flat row shape for the joined listings.
#[derive(Debug, FromQueryResult)]
struct ListRow {
    id: i32,
    student_id: i32,
    student_first_name: Option<String>,
    student_last_name: Option<String>,
    subject_id: Option<i32>,
    subject_title: Option<String>,
    internship_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    is_paid: bool,
    stipend_amount: Option<f64>,
    supervisor_id: Option<i32>,
    supervisor_name: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct FinishedRow {
    id: i32,
    student_id: i32,
    student_first_name: Option<String>,
    student_last_name: Option<String>,
    subject_id: Option<i32>,
    subject_title: Option<String>,
    internship_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    is_paid: bool,
    stipend_amount: Option<f64>,
    supervisor_id: Option<i32>,
    supervisor_name: Option<String>,
    evaluation_id: Option<i32>,
    evaluated_on: Option<NaiveDate>,
    missed_days: Option<i32>,
    comments: Option<String>,
    discipline: Option<String>,
    interest: Option<String>,
    presence: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct ContextRow {
    student_email: String,
    student_first_name: String,
    student_last_name: String,
    subject_title: Option<String>,
}

fn parse_status(raw: &str) -> Result<InternshipStatus, String> {
    InternshipStatus::from_str(raw)
        .map_err(|e| format!("Corrupt status value in internships table: {}", e))
}

impl ListRow {
    fn into_item(self) -> Result<InternshipListItem, String> {
        let status = parse_status(&self.status)?;
        Ok(InternshipListItem {
            id: self.id,
            student_id: self.student_id,
            student_first_name: self.student_first_name,
            student_last_name: self.student_last_name,
            subject_id: self.subject_id,
            subject_title: self.subject_title,
            internship_type: self.internship_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            is_paid: self.is_paid,
            stipend_amount: self.stipend_amount,
            supervisor_id: self.supervisor_id,
            supervisor_name: self.supervisor_name,
        })
    }
}

/// Shared select: internships joined with student, subject and supervisor
/// display columns.
fn base_select() -> sea_orm::Select<Internships> {
    Internships::find()
        .select_only()
        .column(Column::Id)
        .column(Column::StudentId)
        .column_as(students::Column::Username, "student_first_name")
        .column_as(students::Column::Lastname, "student_last_name")
        .column(Column::SubjectId)
        .column_as(subjects::Column::Title, "subject_title")
        .column(Column::InternshipType)
        .column(Column::StartDate)
        .column(Column::EndDate)
        .column(Column::Status)
        .column(Column::IsPaid)
        .column(Column::StipendAmount)
        .column(Column::SupervisorId)
        .column_as(users::Column::Username, "supervisor_name")
        .join(JoinType::LeftJoin, Relation::Student.def())
        .join(JoinType::LeftJoin, Relation::Subject.def())
        .join(JoinType::LeftJoin, Relation::Supervisor.def())
}

#[async_trait]
impl InternshipQuery for InternshipQueryPostgres {
    async fn find_by_id(&self, internship_id: i32) -> Result<Option<Internship>, String> {
        Internships::find_by_id(internship_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .map(to_domain)
            .transpose()
    }

    async fn list(
        &self,
        status: Option<InternshipStatus>,
    ) -> Result<Vec<InternshipListItem>, String> {
        let mut query = base_select().order_by_desc(Column::Id);

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        query
            .into_model::<ListRow>()
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(ListRow::into_item)
            .collect()
    }

    async fn list_by_supervisor(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipListItem>, String> {
        base_select()
            .filter(Column::SupervisorId.eq(supervisor_id))
            .order_by_desc(Column::EndDate)
            .into_model::<ListRow>()
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(ListRow::into_item)
            .collect()
    }

    async fn list_finished_by_supervisor(
        &self,
        supervisor_id: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<FinishedInternshipItem>, String> {
        // The evaluation join is scoped to this supervisor's row so the
        // unique (internship, supervisor) pair yields at most one match.
        let rows = base_select()
            .column_as(evaluations::Column::Id, "evaluation_id")
            .column_as(evaluations::Column::EvaluatedOn, "evaluated_on")
            .column_as(evaluations::Column::MissedDays, "missed_days")
            .column_as(evaluations::Column::Comments, "comments")
            .column_as(evaluations::Column::Discipline, "discipline")
            .column_as(evaluations::Column::Interest, "interest")
            .column_as(evaluations::Column::Presence, "presence")
            .join(
                JoinType::LeftJoin,
                Relation::Evaluations.def().on_condition(move |_left, right| {
                    Expr::col((right, evaluations::Column::SupervisorId))
                        .eq(supervisor_id)
                        .into_condition()
                }),
            )
            .filter(Column::SupervisorId.eq(supervisor_id))
            .filter(Column::EndDate.lte(as_of))
            .order_by_desc(Column::EndDate)
            .into_model::<FinishedRow>()
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        rows.into_iter()
            .map(|row| {
                let FinishedRow {
                    id,
                    student_id,
                    student_first_name,
                    student_last_name,
                    subject_id,
                    subject_title,
                    internship_type,
                    start_date,
                    end_date,
                    status,
                    is_paid,
                    stipend_amount,
                    supervisor_id,
                    supervisor_name,
                    evaluation_id,
                    evaluated_on,
                    missed_days,
                    comments,
                    discipline,
                    interest,
                    presence,
                } = row;

                Ok(FinishedInternshipItem {
                    internship: InternshipListItem {
                        id,
                        student_id,
                        student_first_name,
                        student_last_name,
                        subject_id,
                        subject_title,
                        internship_type,
                        start_date,
                        end_date,
                        status: parse_status(&status)?,
                        is_paid,
                        stipend_amount,
                        supervisor_id,
                        supervisor_name,
                    },
                    evaluation_id,
                    evaluated_on,
                    missed_days,
                    comments,
                    discipline,
                    interest,
                    presence,
                })
            })
            .collect()
    }

    async fn list_proposed(&self) -> Result<Vec<InternshipListItem>, String> {
        base_select()
            .filter(Column::Status.eq(InternshipStatus::Proposed.as_str()))
            .order_by_asc(Column::StartDate)
            .into_model::<ListRow>()
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(ListRow::into_item)
            .collect()
    }

    async fn is_assigned_to(
        &self,
        internship_id: i32,
        supervisor_id: i32,
    ) -> Result<bool, String> {
        let found = Internships::find()
            .filter(Column::Id.eq(internship_id))
            .filter(Column::SupervisorId.eq(supervisor_id))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(found.is_some())
    }

    async fn acceptance_context(
        &self,
        internship_id: i32,
    ) -> Result<Option<AcceptanceContext>, String> {
        let row = Internships::find()
            .select_only()
            .column_as(students::Column::Email, "student_email")
            .column_as(students::Column::Username, "student_first_name")
            .column_as(students::Column::Lastname, "student_last_name")
            .column_as(subjects::Column::Title, "subject_title")
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::LeftJoin, Relation::Subject.def())
            .filter(Column::Id.eq(internship_id))
            .into_model::<ContextRow>()
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(row.map(|r| AcceptanceContext {
            student_email: r.student_email,
            student_name: format!("{} {}", r.student_first_name, r.student_last_name)
                .trim()
                .to_string(),
            subject_title: r.subject_title,
        }))
    }
}
