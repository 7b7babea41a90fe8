use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Trainers::Username)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Trainers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Trainers::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trainers::FirstName).string_len(255).null())
                    .col(ColumnDef::new(Trainers::LastName).string_len(255).null())
                    .col(ColumnDef::new(Trainers::Bio).text().null())
                    .col(ColumnDef::new(Trainers::ProfilePictureUrl).string_len(255).null())
                    .col(ColumnDef::new(Trainers::Specialization).string_len(255).null())
                    .col(
                        ColumnDef::new(Trainers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trainers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Trainers {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Bio,
    ProfilePictureUrl,
    Specialization,
    CreatedAt,
    UpdatedAt,
}
