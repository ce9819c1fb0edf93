//! Service layer for business rules and multi-step flows.
//!
//! Services validate input, coordinate repositories, and call out to the payment gateway
//! and object storage. They cover accounts and roles, listings and their images, search,
//! favorites, leases with their monthly invoices, payments, dashboards, and tenant profiles.

pub mod auth;
pub mod dashboard;
pub mod favorite;
pub mod image;
pub mod kos;
pub mod payment;
pub mod profile;
pub mod rental;
pub mod role;
pub mod search;
