use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreatePaymentDto {
    pub tagihan_id: Option<i32>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub tagihan_id: Option<i32>,
    /// Listing the payment is for
    pub kos_id: Option<i32>,
    pub user_penyewa_id: i32,
    pub user_penyedia_id: i32,
    pub amount: i64,
    pub payment_status: String,
    pub payment_method: String,
    pub invoice_number: String,
    pub mitrans_id: Option<String>,
    pub mitrans_status: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SnapDto {
    pub token: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentCreatedDto {
    pub transaction: TransactionDto,
    /// `null` when the payment gateway could not be reached
    pub midtrans: Option<SnapDto>,
}

/// Client-side payment confirmation sent by the mobile app after Snap closes
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ConfirmPaymentDto {
    pub order_id: String,
    pub status: String,
    pub transaction_status: Option<String>,
}

/// Payment gateway HTTP notification
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationDto {
    pub order_id: String,
    pub status_code: String,
    pub gross_amount: String,
    pub signature_key: String,
    pub transaction_status: String,
    #[serde(default)]
    pub fraud_status: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}
