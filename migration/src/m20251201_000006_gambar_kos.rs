use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000004_kos::Kos, m20251201_000005_tipe_gambar::TipeGambar};

static IDX_GAMBAR_KOS_KOS_ID: &str = "idx-gambar_kos-kos_id";
static FK_GAMBAR_KOS_KOS_ID: &str = "fk-gambar_kos-kos_id";
static FK_GAMBAR_KOS_TIPE_GAMBAR_ID: &str = "fk-gambar_kos-tipe_gambar_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GambarKos::Table)
                    .if_not_exists()
                    .col(pk_auto(GambarKos::Id))
                    .col(integer(GambarKos::KosId))
                    .col(integer(GambarKos::TipeGambarId))
                    .col(string_uniq(GambarKos::ObjectName))
                    .col(string(GambarKos::UrlGambar))
                    .col(timestamp(GambarKos::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAMBAR_KOS_KOS_ID)
                    .table(GambarKos::Table)
                    .col(GambarKos::KosId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAMBAR_KOS_KOS_ID)
                    .from_tbl(GambarKos::Table)
                    .from_col(GambarKos::KosId)
                    .to_tbl(Kos::Table)
                    .to_col(Kos::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAMBAR_KOS_TIPE_GAMBAR_ID)
                    .from_tbl(GambarKos::Table)
                    .from_col(GambarKos::TipeGambarId)
                    .to_tbl(TipeGambar::Table)
                    .to_col(TipeGambar::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAMBAR_KOS_TIPE_GAMBAR_ID)
                    .table(GambarKos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAMBAR_KOS_KOS_ID)
                    .table(GambarKos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAMBAR_KOS_KOS_ID)
                    .table(GambarKos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GambarKos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GambarKos {
    Table,
    Id,
    KosId,
    TipeGambarId,
    ObjectName,
    UrlGambar,
    CreatedAt,
}
