use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{db::KosModel, listing::PropertyStatus};

/// Filters of the paginated public listing
#[derive(Debug, Default, Clone)]
pub struct ActiveKosFilter {
    /// Case-insensitive substring of name or address
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

pub struct KosRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KosRepository<'a, C> {
    /// Creates a new instance of [`KosRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, kos: entity::kos::ActiveModel) -> Result<KosModel, DbErr> {
        kos.insert(self.db).await
    }

    pub async fn get(&self, kos_id: i32) -> Result<Option<KosModel>, DbErr> {
        entity::prelude::Kos::find_by_id(kos_id).one(self.db).await
    }

    /// Saves the changed columns of a listing, stamping `updated_at`
    pub async fn update(&self, mut kos: entity::kos::ActiveModel) -> Result<KosModel, DbErr> {
        kos.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        kos.update(self.db).await
    }

    /// Deletes a listing
    ///
    /// Returns OK regardless of the listing existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, kos_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Kos::delete_by_id(kos_id).exec(self.db).await
    }

    pub async fn list_by_ids(&self, kos_ids: &[i32]) -> Result<Vec<KosModel>, DbErr> {
        if kos_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Kos::find()
            .filter(entity::kos::Column::Id.is_in(kos_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Listings of one owner, newest first
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<KosModel>, DbErr> {
        entity::prelude::Kos::find()
            .filter(entity::kos::Column::UserId.eq(owner_id))
            .order_by_desc(entity::kos::Column::CreatedAt)
            .order_by_desc(entity::kos::Column::Id)
            .all(self.db)
            .await
    }

    /// Up to `limit` listings of any status, newest first
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<KosModel>, DbErr> {
        entity::prelude::Kos::find()
            .order_by_desc(entity::kos::Column::CreatedAt)
            .order_by_desc(entity::kos::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// One page of active listings matching `filter` and the total match count
    pub async fn page_active(
        &self,
        filter: &ActiveKosFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<KosModel>, u64), DbErr> {
        let mut condition = Condition::all().add(
            entity::kos::Column::PropertyStatus.eq(PropertyStatus::Active.as_str()),
        );

        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let pattern = format!("%{}%", search.to_lowercase());

                condition = condition.add(
                    Condition::any()
                        .add(
                            Expr::expr(Func::lower(Expr::col(entity::kos::Column::Name)))
                                .like(pattern.clone()),
                        )
                        .add(
                            Expr::expr(Func::lower(Expr::col(entity::kos::Column::Address)))
                                .like(pattern),
                        ),
                );
            }
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(entity::kos::Column::MonthlyPrice.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(entity::kos::Column::MonthlyPrice.lte(max_price));
        }

        let query = entity::prelude::Kos::find().filter(condition);

        let total = query.clone().count(self.db).await?;
        let page = query
            .order_by_desc(entity::kos::Column::CreatedAt)
            .order_by_desc(entity::kos::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((page, total))
    }

    /// Adds one to the listing's view counter in a single statement
    pub async fn increment_view_count(&self, kos_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Kos::update_many()
            .col_expr(
                entity::kos::Column::ViewCount,
                Expr::col(entity::kos::Column::ViewCount).add(1),
            )
            .filter(entity::kos::Column::Id.eq(kos_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Kos::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: PropertyStatus) -> Result<u64, DbErr> {
        entity::prelude::Kos::find()
            .filter(entity::kos::Column::PropertyStatus.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
