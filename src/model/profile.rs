use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ProfileForm {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    /// `male` or `female`
    pub gender: Option<String>,
    /// ISO date (`YYYY-MM-DD`)
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub user_id: i32,
    pub full_name: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub emergency_contact: String,
    pub updated_at: NaiveDateTime,
}
