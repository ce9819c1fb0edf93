//! Request and response bodies of the HTTP API.

pub mod api;
pub mod dashboard;
pub mod favorite;
pub mod kos;
pub mod payment;
pub mod profile;
pub mod rental;
pub mod user;
