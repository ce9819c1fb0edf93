use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "gambar_kos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kos_id: i32,
    pub tipe_gambar_id: i32,
    #[sea_orm(unique)]
    pub object_name: String,
    pub url_gambar: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kos::Entity",
        from = "Column::KosId",
        to = "super::kos::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Kos,
    #[sea_orm(
        belongs_to = "super::tipe_gambar::Entity",
        from = "Column::TipeGambarId",
        to = "super::tipe_gambar::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TipeGambar,
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl Related<super::tipe_gambar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TipeGambar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
