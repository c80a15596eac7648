pub mod attestation_query_postgres;
pub mod attestation_repository_postgres;
pub mod sea_orm_entity;
