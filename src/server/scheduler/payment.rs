use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{error::Error, service::payment::PaymentService};

/// Marks transactions that stayed pending past the Snap expiry window as failed
///
/// # Returns
/// - `Ok(u64)`: Number of transactions expired
/// - `Err(Error)`: Database error
pub async fn expire_pending_transactions(
    db: DatabaseConnection,
    payment_client: payment_gateway::Client,
) -> Result<u64, Error> {
    PaymentService::new(&db, &payment_client)
        .expire_stale_transactions(Utc::now().naive_utc())
        .await
}
