use sea_orm::DatabaseConnection;

use crate::server::{storage::LocalStorage, util::jwt::JwtKeys};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub payment_client: payment_gateway::Client,
    pub jwt: JwtKeys,
    pub storage: LocalStorage,
}
