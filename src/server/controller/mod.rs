//! HTTP request handlers.
//!
//! Each module owns the endpoints of one area of the API and documents them for the OpenAPI
//! document through `#[utoipa::path]`. Handlers resolve the caller through
//! [`util::get_user`], delegate to the matching service, and wrap results in the
//! `{ "success": true, "data": ... }` envelope.

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
pub mod util;
pub mod webhook;
