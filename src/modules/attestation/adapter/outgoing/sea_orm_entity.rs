use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attestations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub internship_id: i32,
    pub generated_on: Date,
    pub qr_code_data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::internship::adapter::outgoing::sea_orm_entity::internships::Entity",
        from = "Column::InternshipId",
        to = "crate::internship::adapter::outgoing::sea_orm_entity::internships::Column::Id"
    )]
    Internship,
}

impl ActiveModelBehavior for ActiveModel {}
