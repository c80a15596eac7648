pub mod sea_orm_entity;
pub mod student_query_postgres;
pub mod student_repository_postgres;
