use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_app_user::AppUser;

static FK_PROFILE_PENYEWA_USER_ID: &str = "fk-profile_penyewa-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfilePenyewa::Table)
                    .if_not_exists()
                    .col(integer(ProfilePenyewa::UserId).primary_key())
                    .col(string(ProfilePenyewa::FullName))
                    .col(string(ProfilePenyewa::PhoneNumber))
                    .col(string(ProfilePenyewa::Gender))
                    .col(date(ProfilePenyewa::DateOfBirth))
                    .col(string(ProfilePenyewa::Address))
                    .col(string(ProfilePenyewa::EmergencyContact))
                    .col(timestamp(ProfilePenyewa::CreatedAt))
                    .col(timestamp(ProfilePenyewa::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_PENYEWA_USER_ID)
                    .from_tbl(ProfilePenyewa::Table)
                    .from_col(ProfilePenyewa::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROFILE_PENYEWA_USER_ID)
                    .table(ProfilePenyewa::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfilePenyewa::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProfilePenyewa {
    Table,
    UserId,
    FullName,
    PhoneNumber,
    Gender,
    DateOfBirth,
    Address,
    EmergencyContact,
    CreatedAt,
    UpdatedAt,
}
