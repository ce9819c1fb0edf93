use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000001_app_user::AppUser, m20251201_000004_kos::Kos};

static IDX_USER_LIKES_USER_ID_KOS_ID: &str = "idx-user_likes-user_id-kos_id";
static FK_USER_LIKES_USER_ID: &str = "fk-user_likes-user_id";
static FK_USER_LIKES_KOS_ID: &str = "fk-user_likes-kos_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLikes::Table)
                    .if_not_exists()
                    .col(pk_auto(UserLikes::Id))
                    .col(integer(UserLikes::UserId))
                    .col(integer(UserLikes::KosId))
                    .col(timestamp(UserLikes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_LIKES_USER_ID_KOS_ID)
                    .table(UserLikes::Table)
                    .col(UserLikes::UserId)
                    .col(UserLikes::KosId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_LIKES_USER_ID)
                    .from_tbl(UserLikes::Table)
                    .from_col(UserLikes::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_LIKES_KOS_ID)
                    .from_tbl(UserLikes::Table)
                    .from_col(UserLikes::KosId)
                    .to_tbl(Kos::Table)
                    .to_col(Kos::Id)
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
                    .name(FK_USER_LIKES_KOS_ID)
                    .table(UserLikes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_LIKES_USER_ID)
                    .table(UserLikes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_LIKES_USER_ID_KOS_ID)
                    .table(UserLikes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserLikes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserLikes {
    Table,
    Id,
    UserId,
    KosId,
    CreatedAt,
}
