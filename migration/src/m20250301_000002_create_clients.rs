use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_trainers::Trainers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::TrainerId).integer().not_null())
                    .col(ColumnDef::new(Clients::FirstName).string_len(255).not_null())
                    .col(ColumnDef::new(Clients::LastName).string_len(255).not_null())
                    .col(ColumnDef::new(Clients::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Clients::PhoneNumber).string_len(50).null())
                    .col(ColumnDef::new(Clients::DateOfBirth).date().null())
                    .col(ColumnDef::new(Clients::Address).text().null())
                    .col(ColumnDef::new(Clients::ProfilePictureUrl).string_len(255).null())
                    .col(ColumnDef::new(Clients::HealthNotes).text().null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Clients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clients_trainer_id")
                            .from(Clients::Table, Clients::TrainerId)
                            .to(Trainers::Table, Trainers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Client email is unique per trainer, not globally
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clients_trainer_email")
                    .table(Clients::Table)
                    .col(Clients::TrainerId)
                    .col(Clients::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    TrainerId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
    Address,
    ProfilePictureUrl,
    HealthNotes,
    CreatedAt,
    UpdatedAt,
}
