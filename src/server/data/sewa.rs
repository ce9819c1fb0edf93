use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::{billing::SEWA_STATUS_ACTIVE, db::SewaModel};

pub struct SewaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SewaRepository<'a, C> {
    /// Creates a new instance of [`SewaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active lease
    pub async fn create(
        &self,
        kos_id: i32,
        user_penyewa_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        monthly_price: i64,
    ) -> Result<SewaModel, DbErr> {
        let sewa = entity::sewa::ActiveModel {
            kos_id: ActiveValue::Set(kos_id),
            user_penyewa_id: ActiveValue::Set(user_penyewa_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            monthly_price: ActiveValue::Set(monthly_price),
            status: ActiveValue::Set(SEWA_STATUS_ACTIVE.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        sewa.insert(self.db).await
    }

    pub async fn get(&self, sewa_id: i32) -> Result<Option<SewaModel>, DbErr> {
        entity::prelude::Sewa::find_by_id(sewa_id).one(self.db).await
    }

    pub async fn delete(&self, sewa_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Sewa::delete_by_id(sewa_id)
            .exec(self.db)
            .await
    }

    pub async fn count_active_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Sewa::find()
            .filter(entity::sewa::Column::UserPenyewaId.eq(user_id))
            .filter(entity::sewa::Column::Status.eq(SEWA_STATUS_ACTIVE))
            .count(self.db)
            .await
    }

    /// Leases of any status referencing the listing
    pub async fn count_for_kos(&self, kos_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Sewa::find()
            .filter(entity::sewa::Column::KosId.eq(kos_id))
            .count(self.db)
            .await
    }
}
