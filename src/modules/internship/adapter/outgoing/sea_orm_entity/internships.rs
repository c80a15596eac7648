use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "internships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub subject_id: Option<i32>,
    pub internship_type: String,
    pub start_date: Date,
    pub end_date: Date,
    /// Canonical status string; the check constraint keeps it closed.
    pub status: String,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
    pub validated_by: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::student::adapter::outgoing::sea_orm_entity::students::Entity",
        from = "Column::StudentId",
        to = "crate::student::adapter::outgoing::sea_orm_entity::students::Column::Id"
    )]
    Student,

    #[sea_orm(
        belongs_to = "crate::subject::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::SubjectId",
        to = "crate::subject::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Subject,

    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::SupervisorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Supervisor,

    #[sea_orm(
        has_many = "crate::evaluation::adapter::outgoing::sea_orm_entity::evaluations::Entity"
    )]
    Evaluations,
}

impl ActiveModelBehavior for ActiveModel {}
