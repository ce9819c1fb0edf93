use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tagihan_id: Option<i32>,
    pub kos_id: Option<i32>,
    pub user_penyewa_id: i32,
    pub user_penyedia_id: i32,
    pub amount: i64,
    pub payment_status: String,
    pub payment_method: String,
    #[sea_orm(unique)]
    pub invoice_number: String,
    pub mitrans_id: Option<String>,
    pub mitrans_status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tagihan::Entity",
        from = "Column::TagihanId",
        to = "super::tagihan::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Tagihan,
    #[sea_orm(
        belongs_to = "super::kos::Entity",
        from = "Column::KosId",
        to = "super::kos::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Kos,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserPenyewaId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Penyewa,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserPenyediaId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Penyedia,
}

impl Related<super::tagihan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tagihan.def()
    }
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
