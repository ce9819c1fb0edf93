//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! [`sea_orm::ConnectionTrait`], so services can run them against a plain connection.

pub mod gambar;
pub mod kos;
pub mod like;
pub mod profile;
pub mod role;
pub mod sewa;
pub mod tagihan;
pub mod transaction;
pub mod user;
