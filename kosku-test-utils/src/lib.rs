//! Shared test harness for the kosku workspace.
//!
//! Provides [`TestSetup`], an isolated environment built around an in-memory SQLite
//! database, an in-memory session, and a mock HTTP server standing in for the Midtrans
//! Snap API, plus fixtures for inserting users, listings, and billing records.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::*, test_setup_with_billing_tables, test_setup_with_kos_tables,
        test_setup_with_tables, test_setup_with_user_tables, TestError, TestSetup,
    };
}
