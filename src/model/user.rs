use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Role names held by a user and the derived convenience flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoleFlagsDto {
    pub roles: Vec<String>,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(rename = "isPemilik")]
    pub is_pemilik: bool,
    #[serde(rename = "isPenyewa")]
    pub is_penyewa: bool,
}

/// Current user with their roles
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MeDto {
    pub user: UserDto,
    #[serde(flatten)]
    pub roles: RoleFlagsDto,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    #[serde(alias = "confirmPassword")]
    pub confirm_password: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `penyewa` or `pemilik`, defaults to `penyewa`
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RefreshDto {
    pub refresh_token: String,
}

/// Token pair issued to mobile clients
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Access token expiry as a unix timestamp
    pub expires_at: i64,
    pub token_type: String,
    pub user: UserDto,
    #[serde(flatten)]
    pub roles: RoleFlagsDto,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AssignRoleDto {
    pub user_id: i32,
    pub role: String,
}
