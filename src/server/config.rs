//! Environment-driven application configuration.

use crate::server::error::config::ConfigError;

pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub jwt_secret: String,
    pub midtrans_server_key: String,
    pub midtrans_is_production: bool,
    pub upload_dir: String,
    pub public_asset_url: String,
    pub bind_addr: String,
    /// Credentials of an admin account created at startup when absent
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let midtrans_is_production = match optional("MIDTRANS_IS_PRODUCTION") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "MIDTRANS_IS_PRODUCTION".to_string(),
                reason: format!("expected true or false, got {value:?}"),
            })?,
        };

        let bind_addr = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("{bind_addr:?} is not a socket address"),
            });
        }

        let public_asset_url = required("PUBLIC_ASSET_URL")?;
        if !public_asset_url.starts_with("http://") && !public_asset_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "PUBLIC_ASSET_URL".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            midtrans_server_key: required("MIDTRANS_SERVER_KEY")?,
            midtrans_is_production,
            upload_dir: optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            public_asset_url,
            bind_addr,
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
