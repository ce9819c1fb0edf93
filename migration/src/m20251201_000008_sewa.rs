use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000001_app_user::AppUser, m20251201_000004_kos::Kos};

static IDX_SEWA_USER_PENYEWA_ID: &str = "idx-sewa-user_penyewa_id";
static FK_SEWA_KOS_ID: &str = "fk-sewa-kos_id";
static FK_SEWA_USER_PENYEWA_ID: &str = "fk-sewa-user_penyewa_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sewa::Table)
                    .if_not_exists()
                    .col(pk_auto(Sewa::Id))
                    .col(integer(Sewa::KosId))
                    .col(integer(Sewa::UserPenyewaId))
                    .col(date(Sewa::StartDate))
                    .col(date_null(Sewa::EndDate))
                    .col(big_integer(Sewa::MonthlyPrice))
                    .col(string(Sewa::Status))
                    .col(timestamp(Sewa::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEWA_USER_PENYEWA_ID)
                    .table(Sewa::Table)
                    .col(Sewa::UserPenyewaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEWA_KOS_ID)
                    .from_tbl(Sewa::Table)
                    .from_col(Sewa::KosId)
                    .to_tbl(Kos::Table)
                    .to_col(Kos::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEWA_USER_PENYEWA_ID)
                    .from_tbl(Sewa::Table)
                    .from_col(Sewa::UserPenyewaId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SEWA_USER_PENYEWA_ID)
                    .table(Sewa::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SEWA_KOS_ID)
                    .table(Sewa::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEWA_USER_PENYEWA_ID)
                    .table(Sewa::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Sewa::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Sewa {
    Table,
    Id,
    KosId,
    UserPenyewaId,
    StartDate,
    EndDate,
    MonthlyPrice,
    Status,
    CreatedAt,
}
