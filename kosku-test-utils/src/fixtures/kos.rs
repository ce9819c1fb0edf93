use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_PHONE, TEST_PUBLIC_ASSET_URL},
    error::TestError,
    TestSetup,
};

/// Image types seeded by the image type migration, in ID order.
pub static SEEDED_IMAGE_TYPES: [&str; 4] = ["depan", "kamar", "kamar_mandi", "lainnya"];

/// Active listing with 10 rooms, 5 available, and the given owner, name, city and price.
pub fn kos_active_model(
    owner_id: i32,
    name: &str,
    city: &str,
    monthly_price: i64,
) -> entity::kos::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::kos::ActiveModel {
        user_id: ActiveValue::Set(owner_id),
        name: ActiveValue::Set(name.to_string()),
        address: ActiveValue::Set(format!("Jl. {} No. 1", name)),
        city: ActiveValue::Set(city.to_string()),
        location: ActiveValue::Set(None),
        description: ActiveValue::Set(Some(format!("{} dekat kampus", name))),
        gender_type: ActiveValue::Set("campur".to_string()),
        monthly_price: ActiveValue::Set(monthly_price),
        yearly_price: ActiveValue::Set(None),
        deposit_price: ActiveValue::Set(None),
        admin_fee: ActiveValue::Set(None),
        total_rooms: ActiveValue::Set(10),
        available_rooms: ActiveValue::Set(5),
        electricity_type: ActiveValue::Set(Some("token".to_string())),
        water_type: ActiveValue::Set(Some("pdam".to_string())),
        room_size: ActiveValue::Set(Some("3x4".to_string())),
        nomor_pemilik: ActiveValue::Set(TEST_PHONE.to_string()),
        property_status: ActiveValue::Set("active".to_string()),
        is_featured: ActiveValue::Set(false),
        view_count: ActiveValue::Set(0),
        fasilitas_kos: ActiveValue::Set(Some("WiFi,Dapur".to_string())),
        fasilitas_kamar: ActiveValue::Set(Some("Kasur,Lemari".to_string())),
        fasilitas_kamar_mandi: ActiveValue::Set(None),
        fasilitas_parkir: ActiveValue::Set(None),
        peraturan_kos: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

impl TestSetup {
    /// Insert the image types the image type migration seeds.
    pub async fn seed_image_types(&self) -> Result<(), TestError> {
        let types = SEEDED_IMAGE_TYPES
            .iter()
            .map(|name| entity::tipe_gambar::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            });

        entity::prelude::TipeGambar::insert_many(types)
            .exec(&self.state.db)
            .await?;

        Ok(())
    }

    /// Insert a listing with the defaults of [`kos_active_model`].
    pub async fn insert_kos(&self, owner_id: i32) -> Result<entity::kos::Model, TestError> {
        self.insert_kos_model(kos_active_model(owner_id, "Kos Melati", "Bandung", 1_000_000))
            .await
    }

    pub async fn insert_kos_model(
        &self,
        model: entity::kos::ActiveModel,
    ) -> Result<entity::kos::Model, TestError> {
        Ok(entity::prelude::Kos::insert(model)
            .exec_with_returning(&self.state.db)
            .await?)
    }

    /// Insert an image record without writing any file.
    pub async fn insert_image(
        &self,
        kos_id: i32,
        object_name: &str,
    ) -> Result<entity::gambar_kos::Model, TestError> {
        Ok(
            entity::prelude::GambarKos::insert(entity::gambar_kos::ActiveModel {
                kos_id: ActiveValue::Set(kos_id),
                tipe_gambar_id: ActiveValue::Set(1),
                object_name: ActiveValue::Set(object_name.to_string()),
                url_gambar: ActiveValue::Set(format!("{}/{}", TEST_PUBLIC_ASSET_URL, object_name)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    pub async fn insert_like(
        &self,
        user_id: i32,
        kos_id: i32,
    ) -> Result<entity::user_likes::Model, TestError> {
        Ok(
            entity::prelude::UserLikes::insert(entity::user_likes::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kos_id: ActiveValue::Set(kos_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}
