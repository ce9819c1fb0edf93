//! Boarding-house (kos) rental marketplace backend.
//!
//! [`model`] holds the request and response types shared with API clients, [`server`] the
//! HTTP application itself.

pub mod model;
pub mod server;
