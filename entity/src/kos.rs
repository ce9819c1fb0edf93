use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "kos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub gender_type: String,
    pub monthly_price: i64,
    pub yearly_price: Option<i64>,
    pub deposit_price: Option<i64>,
    pub admin_fee: Option<i64>,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub electricity_type: Option<String>,
    pub water_type: Option<String>,
    pub room_size: Option<String>,
    pub nomor_pemilik: String,
    pub property_status: String,
    pub is_featured: bool,
    pub view_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub fasilitas_kos: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub fasilitas_kamar: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub fasilitas_kamar_mandi: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub fasilitas_parkir: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub peraturan_kos: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AppUser,
    #[sea_orm(has_many = "super::gambar_kos::Entity")]
    GambarKos,
    #[sea_orm(has_many = "super::sewa::Entity")]
    Sewa,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
    #[sea_orm(has_many = "super::user_likes::Entity")]
    UserLikes,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::gambar_kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GambarKos.def()
    }
}

impl Related<super::sewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sewa.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::user_likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLikes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
