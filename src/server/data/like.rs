use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::{KosModel, UserLikeModel};

pub struct UserLikesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserLikesRepository<'a, C> {
    /// Creates a new instance of [`UserLikesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(&self, user_id: i32, kos_id: i32) -> Result<Option<UserLikeModel>, DbErr> {
        entity::prelude::UserLikes::find()
            .filter(entity::user_likes::Column::UserId.eq(user_id))
            .filter(entity::user_likes::Column::KosId.eq(kos_id))
            .one(self.db)
            .await
    }

    pub async fn create(&self, user_id: i32, kos_id: i32) -> Result<UserLikeModel, DbErr> {
        let like = entity::user_likes::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kos_id: ActiveValue::Set(kos_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        like.insert(self.db).await
    }

    /// Removes every like of the pair, leaving no duplicate behind
    pub async fn delete(&self, user_id: i32, kos_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserLikes::delete_many()
            .filter(entity::user_likes::Column::UserId.eq(user_id))
            .filter(entity::user_likes::Column::KosId.eq(kos_id))
            .exec(self.db)
            .await
    }

    /// Listings the user liked, most recently liked first
    pub async fn list_kos_for_user(&self, user_id: i32) -> Result<Vec<KosModel>, DbErr> {
        entity::prelude::Kos::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::kos::Relation::UserLikes.def(),
            )
            .filter(entity::user_likes::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_likes::Column::CreatedAt)
            .order_by_desc(entity::user_likes::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserLikes::find()
            .filter(entity::user_likes::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
