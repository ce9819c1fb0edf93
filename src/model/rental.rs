use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateRentalDto {
    pub kos_id: i32,
    /// ISO date (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// ISO date (`YYYY-MM-DD`), omitted for open-ended leases
    pub end_date: Option<String>,
    /// Used only when the listing has no monthly price
    pub monthly_price: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SewaDto {
    pub id: i32,
    pub kos_id: i32,
    pub user_penyewa_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub monthly_price: i64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagihanDto {
    pub id: i32,
    pub sewa_id: i32,
    pub billing_month: i32,
    pub billing_year: i32,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RentalCreatedDto {
    pub sewa: SewaDto,
    /// Invoice of the first billing month
    pub tagihan: Option<TagihanDto>,
    pub total_invoices: usize,
}

/// Invoice together with the lease and listing it bills for
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceDto {
    pub tagihan: TagihanDto,
    pub sewa: SewaDto,
    pub kos_name: Option<String>,
}
