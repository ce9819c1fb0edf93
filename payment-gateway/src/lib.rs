//! Minimal client for the Midtrans Snap API.
//!
//! Covers the two interactions the rental backend needs: creating a Snap
//! transaction for an invoice and verifying/interpreting the HTTP
//! notifications Midtrans posts back once the payment state changes.
//!
//! ```ignore
//! let client = payment_gateway::Client::builder()
//!     .server_key("SB-Mid-server-xxx")
//!     .production(false)
//!     .build()?;
//!
//! let snap = client.create_transaction(&request).await?;
//! println!("{}", snap.redirect_url);
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod model;
pub mod signature;
pub mod status;

pub use builder::ClientBuilder;
pub use client::Client;
pub use error::Error;
pub use signature::{signature_key, verify_signature};
pub use status::{FraudStatus, TransactionStatus};

/// Base URL of the Snap sandbox environment.
pub static SANDBOX_SNAP_URL: &str = "https://app.sandbox.midtrans.com";

/// Base URL of the Snap production environment.
pub static PRODUCTION_SNAP_URL: &str = "https://app.midtrans.com";
