use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Folds the status spellings accumulated by the legacy application
/// (French/English, accented/plain) onto the canonical vocabulary.
/// A no-op on fresh databases; required when importing a legacy dump.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The check constraint rejects the legacy spellings, so it has to
        // step aside while the data is folded.
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE internships DROP CONSTRAINT IF EXISTS chk_internships_status;",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                UPDATE internships SET status = CASE status
                    WHEN 'Proposé'    THEN 'Proposed'
                    WHEN 'En attente' THEN 'Proposed'
                    WHEN 'En cours'   THEN 'InProgress'
                    WHEN 'En Cours'   THEN 'InProgress'
                    WHEN 'In Progress' THEN 'InProgress'
                    WHEN 'Terminé'    THEN 'Finished'
                    WHEN 'Refusé'     THEN 'Refused'
                    WHEN 'Validé'     THEN 'Validated'
                    WHEN 'Accepted'   THEN 'Validated'
                    WHEN 'Non validé' THEN 'Rejected'
                    ELSE status
                END
                WHERE status NOT IN ('Proposed', 'InProgress', 'Finished',
                                     'Refused', 'Validated', 'Rejected');
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE internships
                ADD CONSTRAINT chk_internships_status
                CHECK (status IN ('Proposed', 'InProgress', 'Finished',
                                  'Refused', 'Validated', 'Rejected'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // The fold is lossy (several legacy spellings collapse onto one
        // canonical value); there is nothing meaningful to restore.
        Ok(())
    }
}
