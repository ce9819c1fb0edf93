use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000008_sewa::Sewa;

static IDX_TAGIHAN_SEWA_ID_PERIOD: &str = "idx-tagihan-sewa_id-billing_year-billing_month";
static FK_TAGIHAN_SEWA_ID: &str = "fk-tagihan-sewa_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tagihan::Table)
                    .if_not_exists()
                    .col(pk_auto(Tagihan::Id))
                    .col(integer(Tagihan::SewaId))
                    .col(integer(Tagihan::BillingMonth))
                    .col(integer(Tagihan::BillingYear))
                    .col(big_integer(Tagihan::Amount))
                    .col(date(Tagihan::DueDate))
                    .col(string(Tagihan::Status))
                    .col(timestamp(Tagihan::CreatedAt))
                    .col(timestamp(Tagihan::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAGIHAN_SEWA_ID_PERIOD)
                    .table(Tagihan::Table)
                    .col(Tagihan::SewaId)
                    .col(Tagihan::BillingYear)
                    .col(Tagihan::BillingMonth)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAGIHAN_SEWA_ID)
                    .from_tbl(Tagihan::Table)
                    .from_col(Tagihan::SewaId)
                    .to_tbl(Sewa::Table)
                    .to_col(Sewa::Id)
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
                    .name(FK_TAGIHAN_SEWA_ID)
                    .table(Tagihan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAGIHAN_SEWA_ID_PERIOD)
                    .table(Tagihan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tagihan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tagihan {
    Table,
    Id,
    SewaId,
    BillingMonth,
    BillingYear,
    Amount,
    DueDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
