use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_app_user::AppUser;

static IDX_KOS_USER_ID: &str = "idx-kos-user_id";
static IDX_KOS_PROPERTY_STATUS: &str = "idx-kos-property_status";
static FK_KOS_USER_ID: &str = "fk-kos-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kos::Table)
                    .if_not_exists()
                    .col(pk_auto(Kos::Id))
                    .col(integer(Kos::UserId))
                    .col(string(Kos::Name))
                    .col(string(Kos::Address))
                    .col(string(Kos::City))
                    .col(string_null(Kos::Location))
                    .col(text_null(Kos::Description))
                    .col(string(Kos::GenderType))
                    .col(big_integer(Kos::MonthlyPrice))
                    .col(big_integer_null(Kos::YearlyPrice))
                    .col(big_integer_null(Kos::DepositPrice))
                    .col(big_integer_null(Kos::AdminFee))
                    .col(integer(Kos::TotalRooms))
                    .col(integer(Kos::AvailableRooms))
                    .col(string_null(Kos::ElectricityType))
                    .col(string_null(Kos::WaterType))
                    .col(string_null(Kos::RoomSize))
                    .col(string(Kos::NomorPemilik))
                    .col(string(Kos::PropertyStatus).default("active"))
                    .col(boolean(Kos::IsFeatured).default(false))
                    .col(integer(Kos::ViewCount).default(0))
                    .col(text_null(Kos::FasilitasKos))
                    .col(text_null(Kos::FasilitasKamar))
                    .col(text_null(Kos::FasilitasKamarMandi))
                    .col(text_null(Kos::FasilitasParkir))
                    .col(text_null(Kos::PeraturanKos))
                    .col(timestamp(Kos::CreatedAt))
                    .col(timestamp(Kos::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KOS_USER_ID)
                    .table(Kos::Table)
                    .col(Kos::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KOS_PROPERTY_STATUS)
                    .table(Kos::Table)
                    .col(Kos::PropertyStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KOS_USER_ID)
                    .from_tbl(Kos::Table)
                    .from_col(Kos::UserId)
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
                    .name(FK_KOS_USER_ID)
                    .table(Kos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KOS_PROPERTY_STATUS)
                    .table(Kos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_KOS_USER_ID).table(Kos::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Kos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Kos {
    Table,
    Id,
    UserId,
    Name,
    Address,
    City,
    Location,
    Description,
    GenderType,
    MonthlyPrice,
    YearlyPrice,
    DepositPrice,
    AdminFee,
    TotalRooms,
    AvailableRooms,
    ElectricityType,
    WaterType,
    RoomSize,
    NomorPemilik,
    PropertyStatus,
    IsFeatured,
    ViewCount,
    FasilitasKos,
    FasilitasKamar,
    FasilitasKamarMandi,
    FasilitasParkir,
    PeraturanKos,
    CreatedAt,
    UpdatedAt,
}
