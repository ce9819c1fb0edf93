//! Session data models and utilities.
//!
//! Type-safe wrappers for data kept in the web dashboard session (Redis-backed via
//! tower-sessions).

pub mod user;
