pub mod evaluation_query_postgres;
pub mod evaluation_repository_postgres;
pub mod sea_orm_entity;
