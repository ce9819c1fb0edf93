use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::GambarKosModel;

pub struct GambarKosRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GambarKosRepository<'a, C> {
    /// Creates a new instance of [`GambarKosRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        kos_id: i32,
        tipe_gambar_id: i32,
        object_name: &str,
        url_gambar: &str,
    ) -> Result<GambarKosModel, DbErr> {
        let image = entity::gambar_kos::ActiveModel {
            kos_id: ActiveValue::Set(kos_id),
            tipe_gambar_id: ActiveValue::Set(tipe_gambar_id),
            object_name: ActiveValue::Set(object_name.to_string()),
            url_gambar: ActiveValue::Set(url_gambar.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        image.insert(self.db).await
    }

    pub async fn get(&self, image_id: i32) -> Result<Option<GambarKosModel>, DbErr> {
        entity::prelude::GambarKos::find_by_id(image_id)
            .one(self.db)
            .await
    }

    /// Images of one listing in upload order
    pub async fn list_by_kos(&self, kos_id: i32) -> Result<Vec<GambarKosModel>, DbErr> {
        entity::prelude::GambarKos::find()
            .filter(entity::gambar_kos::Column::KosId.eq(kos_id))
            .order_by_asc(entity::gambar_kos::Column::Id)
            .all(self.db)
            .await
    }

    /// Images of several listings in one query, in upload order
    pub async fn list_by_kos_ids(&self, kos_ids: &[i32]) -> Result<Vec<GambarKosModel>, DbErr> {
        if kos_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GambarKos::find()
            .filter(entity::gambar_kos::Column::KosId.is_in(kos_ids.to_vec()))
            .order_by_asc(entity::gambar_kos::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, image_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GambarKos::delete_by_id(image_id)
            .exec(self.db)
            .await
    }

    /// Whether the image type vocabulary contains `tipe_gambar_id`
    pub async fn tipe_exists(&self, tipe_gambar_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TipeGambar::find_by_id(tipe_gambar_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
