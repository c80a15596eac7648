use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::InternshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::SupervisorId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::EvaluatedOn).date().not_null())
                    .col(ColumnDef::new(Evaluations::MissedDays).integer())
                    .col(ColumnDef::new(Evaluations::Comments).text())
                    .col(ColumnDef::new(Evaluations::Discipline).string_len(20))
                    .col(ColumnDef::new(Evaluations::Interest).string_len(20))
                    .col(ColumnDef::new(Evaluations::Presence).string_len(20))
                    .col(ColumnDef::new(Evaluations::ValidatedBy).integer())
                    .col(
                        ColumnDef::new(Evaluations::ValidatedAt)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluations_internship_id")
                            .from(Evaluations::Table, Evaluations::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluations_supervisor_id")
                            .from(Evaluations::Table, Evaluations::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluations_validated_by")
                            .from(Evaluations::Table, Evaluations::ValidatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The upsert contract: one evaluation per (internship, supervisor).
        // The legacy application enforced this in code only.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_evaluations_internship_supervisor
                ON evaluations (internship_id, supervisor_id);
                "#,
            )
            .await?;

        // Pending counter-validation listing and KPI counter.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_evaluations_pending
                ON evaluations (id)
                WHERE validated_by IS NULL;
                "#,
            )
            .await?;

        // Ratings share the closed vocabulary; NULL means "cleared".
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE evaluations
                ADD CONSTRAINT chk_evaluations_ratings
                CHECK (
                    (discipline IS NULL OR discipline IN ('Excellent', 'Average', 'Poor'))
                    AND (interest IS NULL OR interest IN ('Excellent', 'Average', 'Poor'))
                    AND (presence IS NULL OR presence IN ('Excellent', 'Average', 'Poor'))
                    AND (missed_days IS NULL OR missed_days >= 0)
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_evaluations_internship_supervisor;
                DROP INDEX IF EXISTS idx_evaluations_pending;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Evaluations {
    Table,
    Id,
    InternshipId,
    SupervisorId,
    EvaluatedOn,
    MissedDays,
    Comments,
    Discipline,
    Interest,
    Presence,
    ValidatedBy,
    ValidatedAt,
}

#[derive(DeriveIden)]
enum Internships {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
