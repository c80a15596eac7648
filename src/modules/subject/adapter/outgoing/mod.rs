pub mod sea_orm_entity;
pub mod subject_query_postgres;
pub mod subject_repository_postgres;
