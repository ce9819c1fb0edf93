//! Utility functions for controller request handling.
//!
//! This module provides the request authentication helpers shared by every protected
//! endpoint: resolving the current user from a bearer token or the session, and checking
//! that user's roles.

pub mod get_user;
