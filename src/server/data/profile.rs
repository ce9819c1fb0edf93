use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};

use crate::server::model::db::ProfilePenyewaModel;

/// Validated tenant profile values
pub struct ProfileValues {
    pub full_name: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub emergency_contact: String,
}

pub struct ProfilePenyewaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfilePenyewaRepository<'a, C> {
    /// Creates a new instance of [`ProfilePenyewaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<ProfilePenyewaModel>, DbErr> {
        entity::prelude::ProfilePenyewa::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Inserts the profile or replaces every field of the existing one
    pub async fn upsert(
        &self,
        user_id: i32,
        values: ProfileValues,
    ) -> Result<ProfilePenyewaModel, DbErr> {
        let now = Utc::now().naive_utc();

        let profile = entity::profile_penyewa::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            full_name: ActiveValue::Set(values.full_name),
            phone_number: ActiveValue::Set(values.phone_number),
            gender: ActiveValue::Set(values.gender),
            date_of_birth: ActiveValue::Set(values.date_of_birth),
            address: ActiveValue::Set(values.address),
            emergency_contact: ActiveValue::Set(values.emergency_contact),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::ProfilePenyewa::insert(profile)
            .on_conflict(
                OnConflict::column(entity::profile_penyewa::Column::UserId)
                    .update_columns([
                        entity::profile_penyewa::Column::FullName,
                        entity::profile_penyewa::Column::PhoneNumber,
                        entity::profile_penyewa::Column::Gender,
                        entity::profile_penyewa::Column::DateOfBirth,
                        entity::profile_penyewa::Column::Address,
                        entity::profile_penyewa::Column::EmergencyContact,
                        entity::profile_penyewa::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
