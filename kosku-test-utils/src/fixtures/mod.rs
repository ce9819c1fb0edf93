//! Test fixtures for database records and mock HTTP endpoints.
//!
//! - `user` - accounts, roles, and the seeded role vocabulary
//! - `kos` - listings, images, likes, and the seeded image types
//! - `billing` - leases, invoices, transactions, and tenant profiles
//! - `snap` - mock Midtrans Snap endpoints

pub mod billing;
pub mod kos;
pub mod snap;
pub mod user;
