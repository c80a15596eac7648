pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users_table;
mod m20250801_000002_create_students_table;
mod m20250801_000003_create_subjects_table;
mod m20250801_000004_create_internships_table;
mod m20250801_000005_create_evaluations_table;
mod m20250801_000006_create_internship_notes_table;
mod m20250801_000007_create_attestations_table;
mod m20250802_000001_normalize_internship_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_students_table::Migration),
            Box::new(m20250801_000003_create_subjects_table::Migration),
            Box::new(m20250801_000004_create_internships_table::Migration),
            Box::new(m20250801_000005_create_evaluations_table::Migration),
            Box::new(m20250801_000006_create_internship_notes_table::Migration),
            Box::new(m20250801_000007_create_attestations_table::Migration),
            Box::new(m20250802_000001_normalize_internship_status::Migration),
        ]
    }
}
