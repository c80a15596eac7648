pub mod internship_query_postgres;
pub mod internship_repository_postgres;
pub mod note_repository_postgres;
pub mod sea_orm_entity;
