use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Listing form submitted by owners when creating or editing a kos
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KosForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub gender_type: String,
    #[serde(default)]
    pub monthly_price: i64,
    pub yearly_price: Option<i64>,
    pub deposit_price: Option<i64>,
    pub admin_fee: Option<i64>,
    #[serde(default)]
    pub total_rooms: i32,
    #[serde(default)]
    pub available_rooms: i32,
    pub electricity_type: Option<String>,
    pub water_type: Option<String>,
    pub room_size: Option<String>,
    #[serde(default)]
    pub nomor_pemilik: String,
    pub property_status: Option<String>,
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub fasilitas_kos: Vec<String>,
    #[serde(default)]
    pub fasilitas_kamar: Vec<String>,
    #[serde(default)]
    pub fasilitas_kamar_mandi: Vec<String>,
    #[serde(default)]
    pub fasilitas_parkir: Vec<String>,
    #[serde(default)]
    pub peraturan_kos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GambarDto {
    pub id: i32,
    pub kos_id: i32,
    pub tipe_gambar_id: i32,
    pub url_gambar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct KosDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub gender_type: String,
    pub monthly_price: i64,
    pub yearly_price: Option<i64>,
    pub deposit_price: Option<i64>,
    pub admin_fee: Option<i64>,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub electricity_type: Option<String>,
    pub water_type: Option<String>,
    pub room_size: Option<String>,
    pub nomor_pemilik: String,
    pub property_status: String,
    pub is_featured: bool,
    pub view_count: i32,
    pub fasilitas_kos: Vec<String>,
    pub fasilitas_kamar: Vec<String>,
    pub fasilitas_kamar_mandi: Vec<String>,
    pub fasilitas_parkir: Vec<String>,
    pub peraturan_kos: Vec<String>,
    pub images: Vec<GambarDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Web search filters; numeric filters that fail to parse are ignored
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    pub gender_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SearchResultDto {
    pub kos: Vec<KosDto>,
    /// Distinct cities of the fetched listings, sorted
    pub cities: Vec<String>,
}

/// Mobile listing query; `offset` overrides `page` when present
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct MobileSearchQuery {
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ImageTypeQuery {
    pub tipe_gambar_id: Option<i32>,
}
