use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tipe_gambar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gambar_kos::Entity")]
    GambarKos,
}

impl Related<super::gambar_kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GambarKos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
