use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InternshipNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InternshipNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InternshipNotes::InternshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InternshipNotes::SupervisorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InternshipNotes::NotedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(InternshipNotes::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internship_notes_internship_id")
                            .from(InternshipNotes::Table, InternshipNotes::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internship_notes_supervisor_id")
                            .from(InternshipNotes::Table, InternshipNotes::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_internship_notes_internship
                ON internship_notes (internship_id, noted_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_internship_notes_internship")
            .await?;

        manager
            .drop_table(Table::drop().table(InternshipNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InternshipNotes {
    Table,
    Id,
    InternshipId,
    SupervisorId,
    NotedAt,
    Content,
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
