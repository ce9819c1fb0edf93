use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    PaymentGatewayError(#[from] payment_gateway::Error),
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
}
