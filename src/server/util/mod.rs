//! Utility functions and helpers for server operations.
//!
//! Date arithmetic for billing periods, input validation rules, facility list encoding,
//! random identifiers, and bearer token signing shared by services and controllers.

pub mod facility;
pub mod generate;
pub mod jwt;
pub mod time;
pub mod validation;
