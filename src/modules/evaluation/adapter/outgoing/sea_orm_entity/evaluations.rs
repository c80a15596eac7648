use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub internship_id: i32,
    pub supervisor_id: i32,
    pub evaluated_on: Date,
    /// Missed-days count; NULL when presence never dipped below Average
    /// or after an unvalidate cleared the row.
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
    pub discipline: Option<String>,
    pub interest: Option<String>,
    pub presence: Option<String>,
    pub validated_by: Option<i32>,
    pub validated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::internship::adapter::outgoing::sea_orm_entity::internships::Entity",
        from = "Column::InternshipId",
        to = "crate::internship::adapter::outgoing::sea_orm_entity::internships::Column::Id"
    )]
    Internship,

    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::SupervisorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Supervisor,
}

impl Related<crate::internship::adapter::outgoing::sea_orm_entity::internships::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Internship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
