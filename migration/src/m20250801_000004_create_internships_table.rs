use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Internships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Internships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Internships::StudentId).integer().not_null())
                    .col(ColumnDef::new(Internships::SubjectId).integer())
                    .col(
                        ColumnDef::new(Internships::InternshipType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Internships::StartDate).date().not_null())
                    .col(ColumnDef::new(Internships::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Internships::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Internships::IsPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Internships::StipendAmount).double())
                    .col(ColumnDef::new(Internships::SupervisorId).integer())
                    .col(ColumnDef::new(Internships::AcademicSupervisorId).integer())
                    .col(ColumnDef::new(Internships::ValidatedBy).integer())
                    .col(
                        ColumnDef::new(Internships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Internships::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internships_student_id")
                            .from(Internships::Table, Internships::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internships_subject_id")
                            .from(Internships::Table, Internships::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internships_supervisor_id")
                            .from(Internships::Table, Internships::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internships_validated_by")
                            .from(Internships::Table, Internships::ValidatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Closed status vocabulary (legacy variants are folded by the
        // normalize migration before this constraint would reject them
        // on fresh databases; the constraint only ever sees canonical rows).
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

        // Status-filtered listings (manager list, chef proposed list, KPIs).
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_internships_status
                ON internships (status);
                "#,
            )
            .await?;

        // Supervisor-scoped listings.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_internships_supervisor
                ON internships (supervisor_id, end_date DESC);
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
                DROP INDEX IF EXISTS idx_internships_status;
                DROP INDEX IF EXISTS idx_internships_supervisor;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Internships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Internships {
    Table,
    Id,
    StudentId,
    SubjectId,
    InternshipType,
    StartDate,
    EndDate,
    Status,
    IsPaid,
    StipendAmount,
    SupervisorId,
    AcademicSupervisorId,
    ValidatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
