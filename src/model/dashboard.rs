use serde::{Deserialize, Serialize};

/// Dashboard statistics, shaped by the caller's highest role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardDto {
    Admin {
        total_kos: u64,
        total_users: u64,
        total_transactions: u64,
        paid_revenue: i64,
    },
    Pemilik {
        total_kos: u64,
        total_rooms: i64,
        available_rooms: i64,
        pending_transactions: u64,
        paid_revenue: i64,
    },
    Penyewa {
        available_kos: u64,
        favorites: u64,
        active_leases: u64,
        unpaid_invoices: u64,
    },
}
