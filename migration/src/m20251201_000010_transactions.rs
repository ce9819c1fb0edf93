use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251201_000001_app_user::AppUser, m20251201_000004_kos::Kos,
    m20251201_000009_tagihan::Tagihan,
};

static IDX_TRANSACTIONS_USER_PENYEWA_ID: &str = "idx-transactions-user_penyewa_id";
static IDX_TRANSACTIONS_USER_PENYEDIA_ID: &str = "idx-transactions-user_penyedia_id";
static FK_TRANSACTIONS_TAGIHAN_ID: &str = "fk-transactions-tagihan_id";
static FK_TRANSACTIONS_KOS_ID: &str = "fk-transactions-kos_id";
static FK_TRANSACTIONS_USER_PENYEWA_ID: &str = "fk-transactions-user_penyewa_id";
static FK_TRANSACTIONS_USER_PENYEDIA_ID: &str = "fk-transactions-user_penyedia_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(integer_null(Transactions::TagihanId))
                    .col(integer_null(Transactions::KosId))
                    .col(integer(Transactions::UserPenyewaId))
                    .col(integer(Transactions::UserPenyediaId))
                    .col(big_integer(Transactions::Amount))
                    .col(string(Transactions::PaymentStatus))
                    .col(string(Transactions::PaymentMethod))
                    .col(string_uniq(Transactions::InvoiceNumber))
                    .col(string_null(Transactions::MitransId))
                    .col(string_null(Transactions::MitransStatus))
                    .col(text_null(Transactions::Notes))
                    .col(timestamp(Transactions::CreatedAt))
                    .col(timestamp(Transactions::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSACTIONS_USER_PENYEWA_ID)
                    .table(Transactions::Table)
                    .col(Transactions::UserPenyewaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSACTIONS_USER_PENYEDIA_ID)
                    .table(Transactions::Table)
                    .col(Transactions::UserPenyediaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSACTIONS_TAGIHAN_ID)
                    .from_tbl(Transactions::Table)
                    .from_col(Transactions::TagihanId)
                    .to_tbl(Tagihan::Table)
                    .to_col(Tagihan::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSACTIONS_KOS_ID)
                    .from_tbl(Transactions::Table)
                    .from_col(Transactions::KosId)
                    .to_tbl(Kos::Table)
                    .to_col(Kos::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSACTIONS_USER_PENYEWA_ID)
                    .from_tbl(Transactions::Table)
                    .from_col(Transactions::UserPenyewaId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSACTIONS_USER_PENYEDIA_ID)
                    .from_tbl(Transactions::Table)
                    .from_col(Transactions::UserPenyediaId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_TRANSACTIONS_USER_PENYEDIA_ID,
            FK_TRANSACTIONS_USER_PENYEWA_ID,
            FK_TRANSACTIONS_KOS_ID,
            FK_TRANSACTIONS_TAGIHAN_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(Transactions::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_TRANSACTIONS_USER_PENYEDIA_ID,
            IDX_TRANSACTIONS_USER_PENYEWA_ID,
        ] {
            manager
                .drop_index(Index::drop().name(idx).table(Transactions::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    TagihanId,
    KosId,
    UserPenyewaId,
    UserPenyediaId,
    Amount,
    PaymentStatus,
    PaymentMethod,
    InvoiceNumber,
    MitransId,
    MitransStatus,
    Notes,
    CreatedAt,
    UpdatedAt,
}
