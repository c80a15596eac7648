use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::JoinType;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
    RelationTrait,
};
use std::sync::Arc;

use crate::attestation::application::domain::entities::{
    AttestationData, AttestationEvaluation, AttestationInternship, AttestationParty,
    AttestationSubject,
};
use crate::attestation::application::ports::outgoing::AttestationQuery;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::evaluation::adapter::outgoing::sea_orm_entity::evaluations;
use crate::internship::adapter::outgoing::sea_orm_entity::internships;
use crate::internship::application::domain::status::InternshipStatus;
use crate::student::adapter::outgoing::sea_orm_entity::students;
use crate::subject::adapter::outgoing::sea_orm_entity as subjects;

use super::sea_orm_entity::{Column, Entity as Attestations, Relation};

#[derive(Debug, Clone)]
pub struct AttestationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttestationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct FullRow {
    attestation_id: i32,
    generated_on: NaiveDate,
    qr_code_data: String,

    internship_id: i32,
    internship_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    is_paid: bool,
    stipend_amount: Option<f64>,

    student_id: i32,
    student_first_name: String,
    student_last_name: String,
    student_email: String,

    subject_id: Option<i32>,
    subject_title: Option<String>,
    subject_description: Option<String>,

    supervisor_id: Option<i32>,
    supervisor_first_name: Option<String>,
    supervisor_last_name: Option<String>,
    supervisor_email: Option<String>,

    evaluation_id: i32,
    evaluated_on: NaiveDate,
    missed_days: Option<i32>,
    comments: Option<String>,
}

#[async_trait]
impl AttestationQuery for AttestationQueryPostgres {
    async fn is_eligible(&self, internship_id: i32) -> Result<bool, String> {
        // Completed lifecycle with a rated evaluation on record.
        let found = internships::Entity::find()
            .join(JoinType::InnerJoin, internships::Relation::Evaluations.def())
            .filter(internships::Column::Id.eq(internship_id))
            .filter(internships::Column::Status.eq(InternshipStatus::Validated.as_str()))
            .filter(evaluations::Column::Discipline.is_not_null())
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(found.is_some())
    }

    async fn full_data(&self, internship_id: i32) -> Result<Option<AttestationData>, String> {
        let row = Attestations::find()
            .select_only()
            .column_as(Column::Id, "attestation_id")
            .column(Column::GeneratedOn)
            .column(Column::QrCodeData)
            .column_as(internships::Column::Id, "internship_id")
            .column(internships::Column::InternshipType)
            .column(internships::Column::StartDate)
            .column(internships::Column::EndDate)
            .column(internships::Column::Status)
            .column(internships::Column::IsPaid)
            .column(internships::Column::StipendAmount)
            .column_as(students::Column::Id, "student_id")
            .column_as(students::Column::Username, "student_first_name")
            .column_as(students::Column::Lastname, "student_last_name")
            .column_as(students::Column::Email, "student_email")
            .column_as(subjects::Column::Id, "subject_id")
            .column_as(subjects::Column::Title, "subject_title")
            .column_as(subjects::Column::Description, "subject_description")
            .column_as(users::Column::Id, "supervisor_id")
            .column_as(users::Column::Username, "supervisor_first_name")
            .column_as(users::Column::Lastname, "supervisor_last_name")
            .column_as(users::Column::Email, "supervisor_email")
            .column_as(evaluations::Column::Id, "evaluation_id")
            .column(evaluations::Column::EvaluatedOn)
            .column(evaluations::Column::MissedDays)
            .column(evaluations::Column::Comments)
            .join(JoinType::InnerJoin, Relation::Internship.def())
            .join(JoinType::InnerJoin, internships::Relation::Student.def())
            .join(JoinType::LeftJoin, internships::Relation::Subject.def())
            .join(JoinType::LeftJoin, internships::Relation::Supervisor.def())
            .join(JoinType::InnerJoin, internships::Relation::Evaluations.def())
            .filter(Column::InternshipId.eq(internship_id))
            .filter(evaluations::Column::Discipline.is_not_null())
            .into_model::<FullRow>()
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(row.map(|r| AttestationData {
            attestation_id: r.attestation_id,
            generated_on: r.generated_on,
            qr_code_data: r.qr_code_data,
            internship: AttestationInternship {
                internship_id: r.internship_id,
                internship_type: r.internship_type,
                start_date: r.start_date,
                end_date: r.end_date,
                status: r.status,
                is_paid: r.is_paid,
                stipend_amount: r.stipend_amount,
            },
            student: AttestationParty {
                id: r.student_id,
                first_name: r.student_first_name,
                last_name: r.student_last_name,
                email: r.student_email,
            },
            subject: AttestationSubject {
                subject_id: r.subject_id,
                title: r.subject_title,
                description: r.subject_description,
            },
            supervisor: match (
                r.supervisor_id,
                r.supervisor_first_name,
                r.supervisor_last_name,
                r.supervisor_email,
            ) {
                (Some(id), Some(first_name), Some(last_name), Some(email)) => {
                    Some(AttestationParty {
                        id,
                        first_name,
                        last_name,
                        email,
                    })
                }
                _ => None,
            },
            evaluation: AttestationEvaluation {
                evaluation_id: r.evaluation_id,
                evaluated_on: r.evaluated_on,
                missed_days: r.missed_days,
                comments: r.comments,
            },
        }))
    }
}
