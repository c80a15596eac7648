use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attestations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attestations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attestations::InternshipId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Attestations::GeneratedOn)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attestations::QrCodeData)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attestations_internship_id")
                            .from(Attestations::Table, Attestations::InternshipId)
                            .to(Internships::Table, Internships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attestations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attestations {
    Table,
    Id,
    InternshipId,
    GeneratedOn,
    QrCodeData,
}

#[derive(DeriveIden)]
enum Internships {
    Table,
    Id,
}
