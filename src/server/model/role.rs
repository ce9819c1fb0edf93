use crate::model::user::RoleFlagsDto;

/// Role name stored for tenants by earlier releases.
pub const LEGACY_TENANT_ROLE: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
    Pemilik,
    Penyewa,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Pemilik => "pemilik",
            Self::Penyewa => "penyewa",
        }
    }

    /// Parses a role name, accepting the legacy tenant alias.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Self::Admin),
            "pemilik" => Some(Self::Pemilik),
            "penyewa" | LEGACY_TENANT_ROLE => Some(Self::Penyewa),
            _ => None,
        }
    }

    /// Every role table name that grants this role.
    pub fn stored_names(&self) -> &'static [&'static str] {
        match self {
            Self::Admin => &["admin"],
            Self::Pemilik => &["pemilik"],
            Self::Penyewa => &["penyewa", LEGACY_TENANT_ROLE],
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RoleFlagsDto {
    pub fn from_roles(roles: Vec<String>) -> Self {
        let has = |role: RoleName| roles.iter().any(|r| RoleName::parse(r) == Some(role));

        Self {
            is_admin: has(RoleName::Admin),
            is_pemilik: has(RoleName::Pemilik),
            is_penyewa: has(RoleName::Penyewa),
            roles,
        }
    }
}
