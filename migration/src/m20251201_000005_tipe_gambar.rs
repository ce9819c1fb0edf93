use sea_orm_migration::{prelude::*, schema::*};

/// Image themes an owner can tag a listing photo with.
static DEFAULT_IMAGE_TYPES: [&str; 4] = ["depan", "kamar", "kamar_mandi", "lainnya"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TipeGambar::Table)
                    .if_not_exists()
                    .col(pk_auto(TipeGambar::Id))
                    .col(string_uniq(TipeGambar::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(TipeGambar::Table)
            .columns([TipeGambar::Name]);
        for name in DEFAULT_IMAGE_TYPES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TipeGambar::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TipeGambar {
    Table,
    Id,
    Name,
}
