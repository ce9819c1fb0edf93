use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sewa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kos_id: i32,
    pub user_penyewa_id: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub monthly_price: i64,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kos::Entity",
        from = "Column::KosId",
        to = "super::kos::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Kos,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserPenyewaId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AppUser,
    #[sea_orm(has_many = "super::tagihan::Entity")]
    Tagihan,
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::tagihan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tagihan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
