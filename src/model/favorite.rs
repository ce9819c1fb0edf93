use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams, utoipa::ToSchema)]
pub struct LikeTarget {
    pub kos_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LikeToggleDto {
    pub success: bool,
    pub liked: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LikeStatusDto {
    pub success: bool,
    pub liked: bool,
    pub kos_id: i32,
}
