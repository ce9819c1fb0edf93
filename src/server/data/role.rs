use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::RoleModel;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Names of every role assigned to the user, sorted
    pub async fn get_role_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let roles = entity::prelude::Role::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::role::Relation::UserRole.def(),
            )
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    /// Whether the user holds any of the named roles, in a single joined query
    pub async fn has_any_role(&self, user_id: i32, names: &[&str]) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::user_role::Relation::Role.def(),
            )
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::role::Column::Name.is_in(names.iter().copied()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn is_assigned(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn assign(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<entity::user_role::Model, DbErr> {
        let assignment = entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }
}
