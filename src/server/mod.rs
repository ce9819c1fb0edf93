//! Server application core modules.
//!
//! This module contains all server-side functionality for the kosku marketplace: HTTP
//! routing, authentication, database access, listing image storage, Midtrans payments, and
//! scheduled maintenance. Requests flow from [`controller`] handlers through [`service`]
//! business logic to [`data`] repositories.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
