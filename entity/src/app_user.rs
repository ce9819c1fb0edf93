use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
    #[sea_orm(has_many = "super::kos::Entity")]
    Kos,
    #[sea_orm(has_many = "super::sewa::Entity")]
    Sewa,
    #[sea_orm(has_many = "super::user_likes::Entity")]
    UserLikes,
    #[sea_orm(has_one = "super::profile_penyewa::Entity")]
    ProfilePenyewa,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl Related<super::sewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sewa.def()
    }
}

impl Related<super::user_likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLikes.def()
    }
}

impl Related<super::profile_penyewa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfilePenyewa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
